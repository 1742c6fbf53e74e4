//! The closed set of support groups the pattern classifier chooses from.
//!
//! A [`Taxonomy`] is built once at process start (from the built-in defaults
//! or a TOML file) and passed by value to whoever needs it. It is never
//! mutated afterwards.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{HelpdeskError, HelpdeskResult};

/// A support group: who they are, what they own, and sample tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportGroup {
    pub name: String,
    pub responsibilities: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl SupportGroup {
    pub fn new(name: &str, responsibilities: &str, examples: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            responsibilities: responsibilities.to_string(),
            examples: examples.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Ordered, validated collection of support groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    groups: Vec<SupportGroup>,
}

impl Taxonomy {
    /// Build a taxonomy. Rejects empty lists, blank names, and duplicate names.
    pub fn new(groups: Vec<SupportGroup>) -> HelpdeskResult<Self> {
        if groups.is_empty() {
            return Err(HelpdeskError::ConfigError(
                "taxonomy must define at least one support group".to_string(),
            ));
        }
        let mut seen = HashSet::with_capacity(groups.len());
        for group in &groups {
            if group.name.trim().is_empty() {
                return Err(HelpdeskError::ConfigError(
                    "support group name must not be blank".to_string(),
                ));
            }
            if !seen.insert(group.name.as_str()) {
                return Err(HelpdeskError::ConfigError(format!(
                    "duplicate support group: {}",
                    group.name
                )));
            }
        }
        Ok(Self { groups })
    }

    /// Parse a taxonomy from TOML (`[[groups]]` tables).
    pub fn from_toml(toml_str: &str) -> HelpdeskResult<Self> {
        #[derive(Deserialize)]
        struct Document {
            groups: Vec<SupportGroup>,
        }
        let doc: Document = toml::from_str(toml_str)
            .map_err(|e| HelpdeskError::ConfigError(format!("invalid taxonomy: {e}")))?;
        Self::new(doc.groups)
    }

    /// Load a taxonomy TOML file from disk.
    pub fn from_file(path: &Path) -> HelpdeskResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HelpdeskError::ConfigError(format!("cannot read taxonomy {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// The default IT support taxonomy.
    pub fn builtin() -> Self {
        Self {
            groups: builtin_groups(),
        }
    }

    pub fn groups(&self) -> &[SupportGroup] {
        &self.groups
    }

    pub fn get(&self, name: &str) -> Option<&SupportGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_groups() -> Vec<SupportGroup> {
    vec![
        SupportGroup::new(
            "Network Operations",
            "LAN/WAN connectivity, VPN, Wi-Fi, DNS, DHCP, firewalls and routing",
            &[
                "Cannot connect to the VPN from home",
                "Office Wi-Fi keeps dropping every few minutes",
                "Internal site does not resolve, DNS lookup fails",
            ],
        ),
        SupportGroup::new(
            "Security",
            "Phishing, malware, account compromise, access reviews and security incidents",
            &[
                "I clicked a link in a suspicious email",
                "Antivirus flagged a file on my laptop",
                "Someone logged into my account from another country",
            ],
        ),
        SupportGroup::new(
            "Desktop Support",
            "Laptops, desktops, peripherals, printers and operating system problems on end-user devices",
            &[
                "Laptop will not boot after the update",
                "Printer on floor 3 shows offline",
                "Need a second monitor set up",
            ],
        ),
        SupportGroup::new(
            "Email & Collaboration",
            "Mailboxes, calendars, distribution lists, chat and video-conferencing tools",
            &[
                "Outlook is not syncing new mail",
                "Please add me to the finance distribution list",
                "Meeting invites show the wrong time zone",
            ],
        ),
        SupportGroup::new(
            "Application Support",
            "Business applications, licences, installs and application errors",
            &[
                "CRM throws an error when saving a contact",
                "Need a licence for the design suite",
                "Expense tool crashes on upload",
            ],
        ),
        SupportGroup::new(
            "Database Administration",
            "Database availability, performance, backups, restores and access grants",
            &[
                "Reporting queries on the sales database time out",
                "Need read access to the warehouse schema",
                "Restore yesterday's backup of the orders table",
            ],
        ),
        SupportGroup::new(
            "Server Operations",
            "Physical and virtual servers, storage volumes, patching and data-centre hosting",
            &[
                "File server is out of disk space",
                "VM for the build farm is unresponsive",
                "Schedule patching for the web servers",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_unique_names() {
        let taxonomy = Taxonomy::builtin();
        let rebuilt = Taxonomy::new(taxonomy.groups().to_vec());
        assert!(rebuilt.is_ok());
        assert_eq!(taxonomy.len(), 7);
    }

    #[test]
    fn rejects_duplicate_group_names() {
        let err = Taxonomy::new(vec![
            SupportGroup::new("A", "a", &[]),
            SupportGroup::new("A", "again", &[]),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn rejects_empty_taxonomy() {
        assert!(Taxonomy::new(Vec::new()).is_err());
    }

    #[test]
    fn parses_toml_groups() {
        let toml = r#"
[[groups]]
name = "Facilities"
responsibilities = "Badges, desks, building access"
examples = ["Badge does not open door 2"]

[[groups]]
name = "Payroll"
responsibilities = "Salary questions"
"#;
        let taxonomy = Taxonomy::from_toml(toml).unwrap();
        assert_eq!(taxonomy.names(), vec!["Facilities", "Payroll"]);
        assert!(taxonomy.get("Payroll").unwrap().examples.is_empty());
    }
}
