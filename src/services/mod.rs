pub mod plaque_service;
