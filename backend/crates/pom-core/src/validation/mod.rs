pub mod payload_validator;
