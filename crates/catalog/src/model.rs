use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Row of the `projects` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_order: i32,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, deserialize_with = "null_as_default")]
    pub github: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub linkedin: String,
}

/// Row of the `profiles` collection, keyed by the owner's auth user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub social_links: SocialLinks,
}

/// Splits the dashboard's comma separated tech stack, dropping blanks.
pub fn parse_tech_stack(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tech| !tech.is_empty())
        .map(str::to_owned)
        .collect()
}

pub fn join_tech_stack(tech_stack: &[String]) -> String {
    tech_stack.join(", ")
}

/// Public listing order: `display_order` ascending, ties keep backend order.
pub fn sort_projects(projects: &mut [Project]) {
    projects.sort_by_key(|project| project.display_order);
}

/// Project editor fields as typed in the dashboard.
#[derive(Debug, Default, Clone, PartialEq, Validate)]
pub struct ProjectForm {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
    pub repo_url: String,
    pub live_url: String,
    pub tech_stack: String,
    pub image_url: String,
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

impl From<&Project> for ProjectForm {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.to_owned(),
            description: project.description.clone().unwrap_or_default(),
            repo_url: project.repo_url.clone().unwrap_or_default(),
            live_url: project.live_url.clone().unwrap_or_default(),
            tech_stack: join_tech_stack(&project.tech_stack),
            image_url: project.image_url.clone().unwrap_or_default(),
        }
    }
}

impl ProjectForm {
    /// Builds the row to insert or update. `image_url` replaces the form's
    /// value when a new image was uploaded first.
    pub fn into_project(
        self,
        id: Option<i64>,
        display_order: i32,
        image_url: Option<String>,
    ) -> Result<Project, validator::ValidationErrors> {
        self.validate()?;

        Ok(Project {
            id,
            title: self.title.trim().to_owned(),
            description: non_empty(self.description),
            repo_url: non_empty(self.repo_url),
            live_url: non_empty(self.live_url),
            tech_stack: parse_tech_stack(&self.tech_stack),
            image_url: image_url.or_else(|| non_empty(self.image_url)),
            display_order,
        })
    }
}
