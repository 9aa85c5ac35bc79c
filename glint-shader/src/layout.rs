use crate::schema::VertexAttributeDecl;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEntry<'a> {
    pub attribute: &'a VertexAttributeDecl,
    pub offset: u32,
}

/// Tightly packed interleaved vertex layout, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout<'a> {
    pub stride: u32,
    pub entries: Vec<LayoutEntry<'a>>,
}

impl<'a> VertexLayout<'a> {
    pub fn offsets(&self) -> Vec<u32> {
        self.entries.iter().map(|entry| entry.offset).collect()
    }
}

/// Each offset is the sum of the sizes declared before it; no alignment or
/// padding is applied. Unmapped attribute types count as zero bytes.
pub fn compute_layout(attributes: &[VertexAttributeDecl]) -> VertexLayout<'_> {
    let mut stride = 0;
    let entries = attributes
        .iter()
        .map(|attribute| {
            let offset = stride;
            stride += attribute.mapping().byte_size();
            LayoutEntry { attribute, offset }
        })
        .collect();

    VertexLayout { stride, entries }
}
