pub mod plaque_model;
