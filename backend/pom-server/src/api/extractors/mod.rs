pub mod json_body;
