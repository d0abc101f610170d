use folio::catalog::{self, Project, ProjectFilter};

/// Project list behind the category tabs.
#[derive(Debug, Default)]
pub struct ProjectGallery {
    projects: Vec<Project>,
    filter: ProjectFilter,
}

impl ProjectGallery {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            filter: ProjectFilter::All,
        }
    }

    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    /// Returns true when the visible list changed.
    pub fn set_filter(&mut self, filter: ProjectFilter) -> bool {
        if self.filter == filter {
            return false;
        }
        log::debug!("project filter {:?} -> {:?}", self.filter, filter);
        self.filter = filter;
        true
    }

    pub fn reload(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }

    pub fn visible(&self) -> Vec<&Project> {
        catalog::filter(&self.projects, self.filter)
    }

    pub fn heading(project: &Project) -> String {
        if project.featured {
            format!("★ {}", project.title)
        } else {
            project.title.to_string()
        }
    }
}
