//! Data models for medroster.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a doctor on the hospital roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// The doctor's unique ID, assigned by the registry on insertion.
    pub id: u64,
    /// The doctor's name.
    pub name: String,
    /// The doctor's specialization, free-form text.
    pub specialization: String,
}

/// Represents a patient on the hospital roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// The patient's unique ID, assigned by the registry on insertion.
    pub id: u64,
    /// The patient's name.
    pub name: String,
    /// The patient's date of birth, in `YYYY-MM-DD` form.
    pub date_of_birth: String,
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dr {} ({})", self.name, self.specialization)
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, born {}", self.name, self.date_of_birth)
    }
}

/// A person on the roster: either a doctor or a patient.
///
/// Borrows from the registry's collections; used as the result type of the
/// name and general searches, which span both collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Person<'a> {
    Doctor(&'a Doctor),
    Patient(&'a Patient),
}

impl Person<'_> {
    pub fn id(&self) -> u64 {
        match self {
            Person::Doctor(d) => d.id,
            Person::Patient(p) => p.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Person::Doctor(d) => &d.name,
            Person::Patient(p) => &p.name,
        }
    }

    /// A short label for the person's role, used in search result tables.
    pub fn role(&self) -> &'static str {
        match self {
            Person::Doctor(_) => "Doctor",
            Person::Patient(_) => "Patient",
        }
    }
}

impl fmt::Display for Person<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Person::Doctor(d) => d.fmt(f),
            Person::Patient(p) => p.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctor_display_includes_specialization() {
        let doctor = Doctor {
            id: 7,
            name: "Martin".to_string(),
            specialization: "Cardiology".to_string(),
        };
        assert_eq!(doctor.to_string(), "Dr Martin (Cardiology)");
    }

    #[test]
    fn patient_display_includes_date_of_birth() {
        let patient = Patient {
            id: 3,
            name: "Dupont".to_string(),
            date_of_birth: "1984-07-21".to_string(),
        };
        assert_eq!(patient.to_string(), "Dupont, born 1984-07-21");
    }

    #[test]
    fn person_accessors_cover_both_roles() {
        let doctor = Doctor {
            id: 1,
            name: "Martin".to_string(),
            specialization: "Cardiology".to_string(),
        };
        let patient = Patient {
            id: 2,
            name: "Dupont".to_string(),
            date_of_birth: "1990-01-01".to_string(),
        };

        let as_doctor = Person::Doctor(&doctor);
        let as_patient = Person::Patient(&patient);

        assert_eq!(as_doctor.id(), 1);
        assert_eq!(as_doctor.name(), "Martin");
        assert_eq!(as_doctor.role(), "Doctor");
        assert_eq!(as_patient.id(), 2);
        assert_eq!(as_patient.name(), "Dupont");
        assert_eq!(as_patient.role(), "Patient");
    }

    #[test]
    fn doctor_round_trips_through_json() {
        let doctor = Doctor {
            id: 42,
            name: "Curie".to_string(),
            specialization: "Oncology".to_string(),
        };
        let json = serde_json::to_string(&doctor).unwrap();
        let back: Doctor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doctor);
    }
}
