use crate::ProjectDto;
use serde::Serialize;

/// Single project response. The key is plural to match the list response.
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub projects: ProjectDto,
}
