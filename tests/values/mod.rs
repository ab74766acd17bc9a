mod callable;
mod properties;
mod sequence;
