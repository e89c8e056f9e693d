use serde::Serialize;

/// One fake form submission, in output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub timestamp: &'static str,
    pub first_name: String,
    pub last_name: String,
    pub year: u16,
    /// `;`-joined domain tags
    pub domains: String,
    /// `;`-joined motivation tags
    pub motivations: String,
    pub english: bool,
}

impl Record {
    pub fn domain_tags(&self) -> impl Iterator<Item = &str> {
        self.domains.split(';')
    }

    pub fn motivation_tags(&self) -> impl Iterator<Item = &str> {
        self.motivations.split(';')
    }
}

/// Collapse repeated tags, keeping the order they were first drawn in.
pub fn join_distinct<'a, I>(tags: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: Vec<&str> = Vec::new();
    for tag in tags {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen.join(";")
}
