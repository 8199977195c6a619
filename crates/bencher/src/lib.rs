//! Shared fixtures for the response head benchmarks.

/// Size class of a fixture, used to group benchmark reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadSize {
    Small,
    Large,
}

impl HeadSize {
    pub fn label(self) -> &'static str {
        match self {
            HeadSize::Small => "small",
            HeadSize::Large => "large",
        }
    }
}

/// A stored response head together with what decoding it must yield.
#[derive(Debug, Copy, Clone)]
pub struct HeadFixture {
    file_name: &'static str,
    content: &'static str,
    size: HeadSize,
    header_count: usize,
}

impl HeadFixture {
    pub const fn new(file_name: &'static str, content: &'static str, size: HeadSize, header_count: usize) -> Self {
        Self { file_name, content, size, header_count }
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }

    pub fn content(&self) -> &'static str {
        self.content
    }

    pub fn size(&self) -> HeadSize {
        self.size
    }

    /// Number of distinct header names the decoder keeps after merging repeats and
    /// dropping unparseable lines.
    pub fn header_count(&self) -> usize {
        self.header_count
    }

    /// Benchmark id, e.g. `large/large.txt`.
    pub fn id(&self) -> String {
        format!("{}/{}", self.size.label(), self.file_name)
    }
}
