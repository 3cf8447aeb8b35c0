use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
}

const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "David Alejandro González Robles",
    },
    TeamMember {
        name: "Ricardo Absalon Gómez Jiménez",
    },
    TeamMember {
        name: "José Vera Luna",
    },
];

/// People listed on the credits screen, in display order.
pub fn credits() -> &'static [TeamMember] {
    TEAM
}
