use std::fmt;

/// Sections of a mesh dump, in the order they must appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Nodes,
    Boundary,
    Front,
    Triangles,
    Neighbors,
}

impl Section {
    /// The header keyword introducing this section.
    pub fn keyword(self) -> &'static str {
        match self {
            Section::Nodes => "NODES",
            Section::Boundary => "BOUNDARY",
            Section::Front => "FRONT",
            Section::Triangles => "TRIANGLES",
            Section::Neighbors => "NEIGHBORS",
        }
    }

    pub fn from_keyword(kw: &str) -> Option<Self> {
        Some(match kw {
            "NODES" => Section::Nodes,
            "BOUNDARY" => Section::Boundary,
            "FRONT" => Section::Front,
            "TRIANGLES" => Section::Triangles,
            "NEIGHBORS" => Section::Neighbors,
            _ => return None,
        })
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
