use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative efficiency grade assigned to a department, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EfficiencyRating {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
}

impl EfficiencyRating {
    /// Numeric baseline score used before per-reading jitter.
    pub fn baseline_score(self) -> f64 {
        match self {
            Self::A => 95.0,
            Self::AMinus => 90.0,
            Self::BPlus => 85.0,
            Self::B => 80.0,
            Self::BMinus => 75.0,
            Self::CPlus => 70.0,
            Self::C => 65.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
        }
    }
}

impl fmt::Display for EfficiencyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static profile of a campus department.
///
/// Departments are the foreign-key domain of every generated reading and are
/// never mutated after the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: u32,
    pub name: String,
    /// Short unique code, e.g. `"CSE"`.
    pub code: String,
    /// Floor area in square feet.
    pub area: f64,
    pub floors: u32,
    pub rooms: u32,
    /// Headcount.
    pub occupancy: u32,
    pub efficiency_rating: EfficiencyRating,
    pub head: String,
    pub contact: String,
    /// Annual budget in USD.
    pub budget: f64,
    /// Display color as a hex string.
    pub color: String,
}

#[allow(clippy::too_many_arguments)]
fn department(
    id: u32,
    name: &str,
    code: &str,
    area: f64,
    floors: u32,
    rooms: u32,
    occupancy: u32,
    efficiency_rating: EfficiencyRating,
    head: &str,
    contact: &str,
    budget: f64,
    color: &str,
) -> Department {
    Department {
        id,
        name: name.to_string(),
        code: code.to_string(),
        area,
        floors,
        rooms,
        occupancy,
        efficiency_rating,
        head: head.to_string(),
        contact: contact.to_string(),
        budget,
        color: color.to_string(),
    }
}

/// Returns the fixed, ordered campus department catalog.
pub fn campus_departments() -> Vec<Department> {
    use EfficiencyRating::*;

    vec![
        department(
            1,
            "Computer Science & Engineering",
            "CSE",
            15_000.0,
            4,
            45,
            850,
            A,
            "Dr. Sarah Johnson",
            "sarah.johnson@university.edu",
            285_000.0,
            "#3498db",
        ),
        department(
            2,
            "VLSI Design Lab",
            "VLSI",
            8_000.0,
            2,
            20,
            320,
            BPlus,
            "Prof. Michael Chen",
            "michael.chen@university.edu",
            145_000.0,
            "#e74c3c",
        ),
        department(
            3,
            "Administration Building",
            "ADMIN",
            12_000.0,
            3,
            35,
            180,
            B,
            "Ms. Jennifer Davis",
            "jennifer.davis@university.edu",
            95_000.0,
            "#f39c12",
        ),
        department(
            4,
            "Central Library",
            "LIB",
            20_000.0,
            5,
            60,
            1200,
            AMinus,
            "Dr. Robert Wilson",
            "robert.wilson@university.edu",
            320_000.0,
            "#27ae60",
        ),
        department(
            5,
            "Student Dining Hall",
            "CAFE",
            5_000.0,
            1,
            8,
            400,
            CPlus,
            "Mr. David Brown",
            "david.brown@university.edu",
            75_000.0,
            "#9b59b6",
        ),
        department(
            6,
            "Mechanical Engineering",
            "MECH",
            18_000.0,
            3,
            40,
            620,
            BPlus,
            "Dr. Lisa Anderson",
            "lisa.anderson@university.edu",
            265_000.0,
            "#16a085",
        ),
        department(
            7,
            "Student Dormitory A",
            "DORM_A",
            25_000.0,
            8,
            200,
            800,
            BMinus,
            "Ms. Karen White",
            "karen.white@university.edu",
            185_000.0,
            "#e67e22",
        ),
    ]
}

/// Looks up a department by id.
pub fn find_department(departments: &[Department], id: u32) -> Option<&Department> {
    departments.iter().find(|d| d.id == id)
}
