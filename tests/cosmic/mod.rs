mod dynamics;
mod elements;
mod geodetic;
mod hill;
