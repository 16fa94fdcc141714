pub mod ai_service;
pub mod catalog_service;
pub mod geo;
pub mod geocoding_service;
pub mod places_service;
pub mod response_parser;
