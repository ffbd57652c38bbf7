mod curve;
mod parameters;
mod vle_pure;
