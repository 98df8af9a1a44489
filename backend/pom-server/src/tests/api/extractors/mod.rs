mod json_body;
