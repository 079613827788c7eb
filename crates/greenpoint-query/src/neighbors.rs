use greenpoint_model::{NeighborSummary, Project, ProjectId};

/// Full record plus its cyclic neighbors in storage order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetail {
    pub project: Project,
    pub next_project: NeighborSummary,
    pub prev_project: NeighborSummary,
}

/// Linear scan by id. Adjacency wraps at both ends and is taken from the
/// matched position, not from the id value. A single-record collection is
/// its own neighbor on both sides.
#[must_use]
pub fn resolve_project(projects: &[Project], id: ProjectId) -> Option<ProjectDetail> {
    let index = projects.iter().position(|p| p.id == id)?;
    let n = projects.len();
    let next = &projects[(index + 1) % n];
    let prev = &projects[(index + n - 1) % n];
    Some(ProjectDetail {
        project: projects[index].clone(),
        next_project: next.neighbor_summary(),
        prev_project: prev.neighbor_summary(),
    })
}
