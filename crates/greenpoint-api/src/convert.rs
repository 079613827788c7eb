use crate::dto::{ConfigSavedDto, ListProjectsResponseDto, ProjectDetailDto};
use crate::CONFIG_SAVED_MESSAGE;
use greenpoint_query::{ProjectDetail, ProjectPage};

impl From<ProjectPage> for ListProjectsResponseDto {
    fn from(page: ProjectPage) -> Self {
        Self {
            data: page.items,
            meta: page.meta,
        }
    }
}

impl From<ProjectDetail> for ProjectDetailDto {
    fn from(detail: ProjectDetail) -> Self {
        Self {
            project: detail.project,
            next_project: detail.next_project,
            prev_project: detail.prev_project,
        }
    }
}

#[must_use]
pub fn config_saved_dto() -> ConfigSavedDto {
    ConfigSavedDto {
        message: CONFIG_SAVED_MESSAGE.to_string(),
    }
}
