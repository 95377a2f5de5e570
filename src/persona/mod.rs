// src/persona/mod.rs
// Fixed persona registry. Populated once at startup, never mutated.
// Listing callers only ever see the public projection - the system
// prompt stays internal to completion-request assembly.

pub mod hitesh;
pub mod piyush;

use serde::Serialize;

/// Full persona record, process-lifetime immutable.
#[derive(Debug, Clone)]
pub struct PersonaRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub avatar: &'static str,
    pub expertise: &'static [&'static str],
    pub system_prompt: &'static str,
}

/// Public-safe projection of a persona. Deliberately has no
/// system_prompt field, so it cannot leak through serialization.
#[derive(Debug, Clone, Serialize)]
pub struct PersonaSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub avatar: &'static str,
    pub expertise: &'static [&'static str],
}

pub struct PersonaRegistry {
    records: Vec<PersonaRecord>,
}

impl PersonaRegistry {
    /// The built-in persona set. Listing order follows insertion order.
    pub fn builtin() -> Self {
        Self {
            records: vec![
                PersonaRecord {
                    id: "hitesh",
                    name: "Hitesh Choudhary",
                    avatar: "👨‍💻",
                    expertise: &[
                        "React.js",
                        "JavaScript",
                        "Node.js",
                        "Full-stack Development",
                        "Teaching",
                        "Web Development",
                    ],
                    system_prompt: hitesh::HITESH_SYSTEM_PROMPT,
                },
                PersonaRecord {
                    id: "piyush",
                    name: "Piyush Garg",
                    avatar: "🚀",
                    expertise: &[
                        "System Design",
                        "Backend Development",
                        "Microservices",
                        "Database Design",
                        "Scalability",
                        "Software Architecture",
                    ],
                    system_prompt: piyush::PIYUSH_SYSTEM_PROMPT,
                },
            ],
        }
    }

    pub fn get(&self, id: &str) -> Option<&PersonaRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn list(&self) -> Vec<PersonaSummary> {
        self.records
            .iter()
            .map(|record| PersonaSummary {
                id: record.id,
                name: record.name,
                avatar: record.avatar,
                expertise: record.expertise,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
