use crate::content::MlProject;

/// Tags shown on a compact ML card before collapsing into "+N more".
pub const COMPACT_TAG_LIMIT: usize = 3;

/// Featured and remaining ML projects, each in content order.
pub fn split_featured(projects: &[MlProject]) -> (Vec<&MlProject>, Vec<&MlProject>) {
    projects.iter().partition(|p| p.featured)
}

/// The first `limit` tags and how many were left out.
pub fn truncate_tags(tags: &[String], limit: usize) -> (&[String], usize) {
    let shown = tags.len().min(limit);
    (&tags[..shown], tags.len() - shown)
}
