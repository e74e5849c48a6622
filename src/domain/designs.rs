use crate::content::Design;

/// Designs shown before the gallery is expanded.
pub const DESIGN_PREVIEW_COUNT: usize = 6;

pub fn visible_designs(designs: &[Design], expanded: bool) -> &[Design] {
    if expanded {
        designs
    } else {
        &designs[..designs.len().min(DESIGN_PREVIEW_COUNT)]
    }
}

/// The expand/collapse toggle only makes sense when something is hidden.
pub fn has_hidden_designs(designs: &[Design]) -> bool {
    designs.len() > DESIGN_PREVIEW_COUNT
}
