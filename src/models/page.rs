use rocket::serde::Serialize;
use schemars::JsonSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub slug: &'static str,
    pub title: &'static str,
    pub sections: &'static [PageSection],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSection {
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Serialize, Debug, Clone, JsonSchema)]
pub struct PageSummaryResponse {
    pub slug: String,
    pub title: String,
}

#[derive(Serialize, Debug, Clone, JsonSchema)]
pub struct PageSectionResponse {
    pub heading: String,
    pub body: String,
}

#[derive(Serialize, Debug, Clone, JsonSchema)]
pub struct PageResponse {
    pub slug: String,
    pub title: String,
    pub sections: Vec<PageSectionResponse>,
}

impl From<&Page> for PageSummaryResponse {
    fn from(page: &Page) -> Self {
        Self {
            slug: page.slug.to_string(),
            title: page.title.to_string(),
        }
    }
}

impl From<&Page> for PageResponse {
    fn from(page: &Page) -> Self {
        Self {
            slug: page.slug.to_string(),
            title: page.title.to_string(),
            sections: page
                .sections
                .iter()
                .map(|section| PageSectionResponse {
                    heading: section.heading.to_string(),
                    body: section.body.to_string(),
                })
                .collect(),
        }
    }
}
