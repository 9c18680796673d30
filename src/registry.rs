//! The in-memory hospital registry.
//!
//! This module holds the authoritative roster state for one running session:
//! the doctor and patient collections, the derived people counts, and the
//! transient "current selection" slots that screens use to hand context to
//! each other. Everything lives in process memory; nothing is persisted
//! across runs.
//!
//! The registry is owned by the application shell and passed by reference
//! into every screen component. Mutations are synchronous; an optional
//! on-change observer is invoked after each effective mutation, before the
//! mutating call returns.

use crate::models::{Doctor, Patient, Person};
use std::fmt;
use std::fmt::Write as _;
use thiserror::Error;

/// Errors surfaced by registry operations.
///
/// Add, remove and the implemented searches never fail: "not found" is an
/// empty result or a `false` return, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The general multi-criteria search has no defined semantics yet.
    /// Reported explicitly so callers cannot mistake it for "no matches".
    #[error("general search is not implemented")]
    GeneralSearchUnsupported,
}

/// A mutation applied to the registry, as reported to the on-change observer.
///
/// Carries the id of the affected record. No event is emitted for no-op
/// removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    DoctorAdded(u64),
    DoctorRemoved(u64),
    PatientAdded(u64),
    PatientRemoved(u64),
}

type ChangeObserver = Box<dyn FnMut(&ChangeEvent)>;

/// The in-memory store of all doctors and patients for one session.
///
/// Collections keep insertion order. Duplicate names are permitted; records
/// are identified by the u64 id the registry stamps on insertion.
pub struct HospitalRegistry {
    doctors: Vec<Doctor>,
    patients: Vec<Patient>,
    next_id: u64,
    current_doctor: Option<u64>,
    current_patient: Option<u64>,
    on_change: Option<ChangeObserver>,
}

impl HospitalRegistry {
    /// Creates an empty registry. Ids start at 1; 0 is the conventional
    /// "unassigned" id on records handed to `add_doctor`/`add_patient`.
    pub fn new() -> Self {
        Self {
            doctors: Vec::new(),
            patients: Vec::new(),
            next_id: 1,
            current_doctor: None,
            current_patient: None,
            on_change: None,
        }
    }

    /// Registers the observer invoked synchronously after each effective
    /// mutation. Replaces any previously registered observer.
    pub fn set_on_change(&mut self, observer: ChangeObserver) {
        self.on_change = Some(observer);
    }

    fn notify(&mut self, event: ChangeEvent) {
        if let Some(observer) = &mut self.on_change {
            observer(&event);
        }
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Appends a doctor to the roster and returns the assigned id.
    ///
    /// Any id on the given record is overwritten. No duplicate check is
    /// performed; two doctors may share a name.
    pub fn add_doctor(&mut self, mut doctor: Doctor) -> u64 {
        let id = self.allocate_id();
        doctor.id = id;
        self.doctors.push(doctor);
        self.notify(ChangeEvent::DoctorAdded(id));
        id
    }

    /// Appends a patient to the roster and returns the assigned id.
    pub fn add_patient(&mut self, mut patient: Patient) -> u64 {
        let id = self.allocate_id();
        patient.id = id;
        self.patients.push(patient);
        self.notify(ChangeEvent::PatientAdded(id));
        id
    }

    /// Removes the doctor with the given id, returning whether a record was
    /// removed. An absent id is a silent no-op. The current-doctor slot is
    /// left untouched even when it points at the removed record.
    pub fn remove_doctor(&mut self, id: u64) -> bool {
        let before = self.doctors.len();
        self.doctors.retain(|d| d.id != id);
        let removed = self.doctors.len() < before;
        if removed {
            self.notify(ChangeEvent::DoctorRemoved(id));
        }
        removed
    }

    /// Removes the patient with the given id, returning whether a record was
    /// removed. An absent id is a silent no-op.
    pub fn remove_patient(&mut self, id: u64) -> bool {
        let before = self.patients.len();
        self.patients.retain(|p| p.id != id);
        let removed = self.patients.len() < before;
        if removed {
            self.notify(ChangeEvent::PatientRemoved(id));
        }
        removed
    }

    /// The doctor collection, in insertion order.
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// The patient collection, in insertion order.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Renders the roster of doctors, one per line, in insertion order.
    pub fn list_doctors(&self) -> String {
        let mut out = String::new();
        for doctor in &self.doctors {
            let _ = writeln!(out, "{doctor}");
        }
        out
    }

    /// Renders the roster of patients, one per line, in insertion order.
    pub fn list_patients(&self) -> String {
        let mut out = String::new();
        for patient in &self.patients {
            let _ = writeln!(out, "{patient}");
        }
        out
    }

    /// All doctors whose specialization exactly equals `specialization`,
    /// case-sensitive, in insertion order. Empty when nothing matches.
    pub fn find_by_specialization(&self, specialization: &str) -> Vec<&Doctor> {
        self.doctors
            .iter()
            .filter(|d| d.specialization == specialization)
            .collect()
    }

    /// All people whose name exactly equals `name`, case-sensitive: every
    /// matching doctor first, then every matching patient, insertion order
    /// within each group.
    pub fn find_by_name(&self, name: &str) -> Vec<Person<'_>> {
        let doctors = self
            .doctors
            .iter()
            .filter(|d| d.name == name)
            .map(Person::Doctor);
        let patients = self
            .patients
            .iter()
            .filter(|p| p.name == name)
            .map(Person::Patient);
        doctors.chain(patients).collect()
    }

    /// The general multi-criteria search. Its semantics were never defined,
    /// so it reports itself as unsupported instead of returning an empty
    /// result that could pass for "no matches".
    pub fn find_general(&self) -> Result<Vec<Person<'_>>, RegistryError> {
        Err(RegistryError::GeneralSearchUnsupported)
    }

    pub fn doctor_count(&self) -> usize {
        self.doctors.len()
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    /// Total number of people on the roster. Derived from the collections on
    /// every read, so it can never drift from their sum.
    pub fn total_people_count(&self) -> usize {
        self.doctors.len() + self.patients.len()
    }

    /// Resolves the current-doctor slot against the live collection. `None`
    /// when the slot is unset or points at a removed record.
    pub fn current_doctor(&self) -> Option<&Doctor> {
        let id = self.current_doctor?;
        self.doctors.iter().find(|d| d.id == id)
    }

    /// Sets the current-doctor slot. The id is not validated against the
    /// collection; screens may park any id here.
    pub fn set_current_doctor(&mut self, id: Option<u64>) {
        self.current_doctor = id;
    }

    /// The raw current-doctor slot, stale or not.
    pub fn current_doctor_id(&self) -> Option<u64> {
        self.current_doctor
    }

    /// Resolves the current-patient slot against the live collection.
    pub fn current_patient(&self) -> Option<&Patient> {
        let id = self.current_patient?;
        self.patients.iter().find(|p| p.id == id)
    }

    /// Sets the current-patient slot, unvalidated.
    pub fn set_current_patient(&mut self, id: Option<u64>) {
        self.current_patient = id;
    }

    /// The raw current-patient slot, stale or not.
    pub fn current_patient_id(&self) -> Option<u64> {
        self.current_patient
    }
}

impl Default for HospitalRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HospitalRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HospitalRegistry")
            .field("doctors", &self.doctors)
            .field("patients", &self.patients)
            .field("next_id", &self.next_id)
            .field("current_doctor", &self.current_doctor)
            .field("current_patient", &self.current_patient)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn doctor(name: &str, specialization: &str) -> Doctor {
        Doctor {
            id: 0,
            name: name.to_string(),
            specialization: specialization.to_string(),
        }
    }

    fn patient(name: &str) -> Patient {
        Patient {
            id: 0,
            name: name.to_string(),
            date_of_birth: "1980-01-01".to_string(),
        }
    }

    #[test]
    fn counts_stay_consistent_across_mutations() {
        let mut registry = HospitalRegistry::new();

        let martin = registry.add_doctor(doctor("Martin", "Cardiology"));
        assert_eq!(registry.total_people_count(), 1);

        let dupont = registry.add_patient(patient("Dupont"));
        registry.add_doctor(doctor("Curie", "Oncology"));
        assert_eq!(registry.doctor_count(), 2);
        assert_eq!(registry.patient_count(), 1);
        assert_eq!(
            registry.total_people_count(),
            registry.doctor_count() + registry.patient_count()
        );

        assert!(registry.remove_doctor(martin));
        assert!(registry.remove_patient(dupont));
        assert_eq!(registry.doctor_count(), 1);
        assert_eq!(registry.patient_count(), 0);
        assert_eq!(
            registry.total_people_count(),
            registry.doctor_count() + registry.patient_count()
        );
    }

    #[test]
    fn add_then_remove_restores_prior_counts() {
        let mut registry = HospitalRegistry::new();
        registry.add_doctor(doctor("Martin", "Cardiology"));
        let doctors_before = registry.doctor_count();
        let total_before = registry.total_people_count();

        let id = registry.add_doctor(doctor("Curie", "Oncology"));
        assert!(registry.remove_doctor(id));

        assert_eq!(registry.doctor_count(), doctors_before);
        assert_eq!(registry.total_people_count(), total_before);
    }

    #[test]
    fn removing_absent_doctor_is_a_no_op() {
        let mut registry = HospitalRegistry::new();
        registry.add_doctor(doctor("Martin", "Cardiology"));

        assert!(!registry.remove_doctor(999));
        assert_eq!(registry.doctor_count(), 1);
        assert_eq!(registry.total_people_count(), 1);
    }

    #[test]
    fn removing_absent_patient_is_a_no_op() {
        let mut registry = HospitalRegistry::new();
        assert!(!registry.remove_patient(1));
        assert_eq!(registry.patient_count(), 0);
    }

    #[test]
    fn specialization_search_is_exact_and_ordered() {
        let mut registry = HospitalRegistry::new();
        registry.add_doctor(doctor("Martin", "Cardiology"));
        registry.add_doctor(doctor("Curie", "Oncology"));
        registry.add_doctor(doctor("Bernard", "Cardiology"));
        registry.add_doctor(doctor("Moreau", "cardiology"));

        let found = registry.find_by_specialization("Cardiology");
        let names: Vec<&str> = found.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Martin", "Bernard"]);
    }

    #[test]
    fn specialization_search_on_empty_registry_is_empty() {
        let registry = HospitalRegistry::new();
        assert!(registry.find_by_specialization("Cardiology").is_empty());
    }

    #[test]
    fn name_search_lists_doctors_before_patients() {
        let mut registry = HospitalRegistry::new();
        registry.add_patient(patient("Dupont"));
        registry.add_doctor(doctor("Dupont", "Radiology"));
        registry.add_doctor(doctor("Dupont", "Cardiology"));
        registry.add_patient(patient("Dupont"));
        registry.add_doctor(doctor("Martin", "Cardiology"));

        let found = registry.find_by_name("Dupont");
        assert_eq!(found.len(), 4);

        let roles: Vec<&str> = found.iter().map(|p| p.role()).collect();
        assert_eq!(roles, ["Doctor", "Doctor", "Patient", "Patient"]);

        // Insertion order within each group.
        match (&found[0], &found[1]) {
            (Person::Doctor(a), Person::Doctor(b)) => {
                assert_eq!(a.specialization, "Radiology");
                assert_eq!(b.specialization, "Cardiology");
            }
            other => panic!("expected two doctors, got {other:?}"),
        }
    }

    #[test]
    fn name_search_is_case_sensitive() {
        let mut registry = HospitalRegistry::new();
        registry.add_doctor(doctor("Dupont", "Cardiology"));
        assert!(registry.find_by_name("dupont").is_empty());
    }

    #[test]
    fn duplicate_names_are_permitted() {
        let mut registry = HospitalRegistry::new();
        let first = registry.add_doctor(doctor("Martin", "Cardiology"));
        let second = registry.add_doctor(doctor("Martin", "Cardiology"));

        assert_ne!(first, second);
        assert_eq!(registry.find_by_name("Martin").len(), 2);
    }

    #[test]
    fn general_search_reports_unsupported() {
        let registry = HospitalRegistry::new();
        assert_eq!(
            registry.find_general().unwrap_err(),
            RegistryError::GeneralSearchUnsupported
        );
        assert_eq!(
            RegistryError::GeneralSearchUnsupported.to_string(),
            "general search is not implemented"
        );
    }

    #[test]
    fn listing_renders_one_line_per_record() {
        let mut registry = HospitalRegistry::new();
        registry.add_doctor(doctor("Martin", "Cardiology"));
        registry.add_doctor(doctor("Curie", "Oncology"));

        let listing = registry.list_doctors();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines, ["Dr Martin (Cardiology)", "Dr Curie (Oncology)"]);

        assert!(registry.list_patients().is_empty());
    }

    #[test]
    fn selection_slots_are_unvalidated_and_survive_removal() {
        let mut registry = HospitalRegistry::new();
        let id = registry.add_doctor(doctor("Martin", "Cardiology"));

        // Any id may be parked in a slot, member or not.
        registry.set_current_patient(Some(777));
        assert_eq!(registry.current_patient_id(), Some(777));
        assert!(registry.current_patient().is_none());

        registry.set_current_doctor(Some(id));
        assert_eq!(registry.current_doctor().unwrap().name, "Martin");

        // Removal does not clear the slot; it just stops resolving.
        assert!(registry.remove_doctor(id));
        assert_eq!(registry.current_doctor_id(), Some(id));
        assert!(registry.current_doctor().is_none());

        registry.set_current_doctor(None);
        assert_eq!(registry.current_doctor_id(), None);
    }

    #[test]
    fn observer_sees_one_event_per_effective_mutation() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut registry = HospitalRegistry::new();
        registry.set_on_change(Box::new(move |event| sink.borrow_mut().push(*event)));

        let martin = registry.add_doctor(doctor("Martin", "Cardiology"));
        let dupont = registry.add_patient(patient("Dupont"));
        registry.remove_doctor(999); // no-op, no event
        registry.remove_patient(dupont);
        registry.remove_doctor(martin);

        assert_eq!(
            *events.borrow(),
            [
                ChangeEvent::DoctorAdded(martin),
                ChangeEvent::PatientAdded(dupont),
                ChangeEvent::PatientRemoved(dupont),
                ChangeEvent::DoctorRemoved(martin),
            ]
        );
    }

    #[test]
    fn example_session_scenario() {
        let mut registry = HospitalRegistry::new();
        assert_eq!(registry.total_people_count(), 0);

        registry.add_doctor(doctor("Martin", "Cardiology"));
        let dupont = registry.add_patient(patient("Dupont"));
        assert_eq!(registry.total_people_count(), 2);

        let cardiologists = registry.find_by_specialization("Cardiology");
        assert_eq!(cardiologists.len(), 1);
        assert_eq!(cardiologists[0].name, "Martin");

        assert!(registry.remove_patient(dupont));
        assert_eq!(registry.total_people_count(), 1);
        assert_eq!(registry.patient_count(), 0);
    }
}
