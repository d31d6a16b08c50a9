//! Seed records for the reference hospital.
//!
//! All data in this module is hardcoded and fictional. It stands in for a
//! hospital database: the in-memory backend starts from it on every run, and
//! the JSON backend writes it out the first time a data directory is opened.
//!
//! Doctor ids (`d1`..`d4`) match the reference list in `hospital.toml`, so
//! seeded appointments and newly scheduled ones resolve to the same names.

use chrono::{DateTime, NaiveDate, TimeZone, Utc, Weekday};

use medidesk_contracts::{
    appointment::{Appointment, AppointmentStatus},
    billing::{Bill, BillCategory, BillItem, PaymentMethod, PaymentStatus},
    doctor::{Availability, Doctor, DoctorStatus},
    ids::{AppointmentId, BillId, DoctorId, PatientId, PrescriptionId},
    patient::{EmergencyContact, Gender, InsuranceDetails, MedicalHistory, Patient, PatientStatus},
    prescription::{FollowUp, Medication, Prescription},
};

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Calendar date from literal components. Only called with valid dates.
fn day(year: i32, month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, d).unwrap_or_default()
}

/// 08:00 UTC on the given day.
fn stamp(year: i32, month: u32, d: u32) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day(year, month, d).and_hms_opt(8, 0, 0).unwrap_or_default())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn weekdays() -> Vec<Weekday> {
    vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri]
}

// ── Patients ─────────────────────────────────────────────────────────────────

pub fn mock_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: PatientId::new("P001"),
            name: "John Smith".to_string(),
            gender: Gender::Male,
            dob: day(1978, 4, 12),
            blood_type: "A+".to_string(),
            address: "14 Elm Street, Springfield".to_string(),
            phone: "555-0101".to_string(),
            email: "john.smith@example.com".to_string(),
            emergency_contact: EmergencyContact {
                name: "Laura Smith".to_string(),
                relationship: "Spouse".to_string(),
                phone: "555-0102".to_string(),
            },
            medical_history: Some(MedicalHistory {
                allergies: strings(&["Penicillin"]),
                conditions: strings(&["Hypertension"]),
                medications: strings(&["Lisinopril 10mg"]),
                surgeries: Vec::new(),
            }),
            insurance_details: Some(InsuranceDetails {
                provider: "Northwind Health".to_string(),
                policy_number: "NW-448210".to_string(),
                expiry_date: day(2027, 6, 30),
            }),
            status: PatientStatus::Active,
            registered_date: day(2024, 2, 3),
        },
        Patient {
            id: PatientId::new("P002"),
            name: "Jane Smith".to_string(),
            gender: Gender::Female,
            dob: day(1985, 9, 23),
            blood_type: "O-".to_string(),
            address: "14 Elm Street, Springfield".to_string(),
            phone: "555-0103".to_string(),
            email: "jane.smith@example.com".to_string(),
            emergency_contact: EmergencyContact {
                name: "John Smith".to_string(),
                relationship: "Brother".to_string(),
                phone: "555-0101".to_string(),
            },
            medical_history: Some(MedicalHistory {
                allergies: Vec::new(),
                conditions: strings(&["Migraine"]),
                medications: Vec::new(),
                surgeries: strings(&["Appendectomy (2009)"]),
            }),
            insurance_details: None,
            status: PatientStatus::Active,
            registered_date: day(2024, 5, 17),
        },
        Patient {
            id: PatientId::new("P003"),
            name: "Maria Garcia".to_string(),
            gender: Gender::Female,
            dob: day(1992, 1, 8),
            blood_type: "B+".to_string(),
            address: "301 Harbor Road, Shelbyville".to_string(),
            phone: "555-0144".to_string(),
            email: "maria.garcia@example.com".to_string(),
            emergency_contact: EmergencyContact {
                name: "Luis Garcia".to_string(),
                relationship: "Father".to_string(),
                phone: "555-0145".to_string(),
            },
            medical_history: None,
            insurance_details: Some(InsuranceDetails {
                provider: "Contoso Mutual".to_string(),
                policy_number: "CM-99120".to_string(),
                expiry_date: day(2026, 12, 31),
            }),
            status: PatientStatus::Active,
            registered_date: day(2025, 1, 20),
        },
        Patient {
            id: PatientId::new("P004"),
            name: "Ahmed Khan".to_string(),
            gender: Gender::Male,
            dob: day(1960, 11, 2),
            blood_type: "AB+".to_string(),
            address: "7 Mill Lane, Ogdenville".to_string(),
            phone: "555-0170".to_string(),
            email: "ahmed.khan@example.com".to_string(),
            emergency_contact: EmergencyContact {
                name: "Sara Khan".to_string(),
                relationship: "Daughter".to_string(),
                phone: "555-0171".to_string(),
            },
            medical_history: Some(MedicalHistory {
                allergies: strings(&["Latex"]),
                conditions: strings(&["Type 2 diabetes", "Osteoarthritis"]),
                medications: strings(&["Metformin 500mg"]),
                surgeries: strings(&["Knee arthroscopy (2018)"]),
            }),
            insurance_details: None,
            status: PatientStatus::Inactive,
            registered_date: day(2023, 8, 9),
        },
        Patient {
            id: PatientId::new("P005"),
            name: "Emily Chen".to_string(),
            gender: Gender::Female,
            dob: day(2016, 6, 14),
            blood_type: "A-".to_string(),
            address: "88 Cedar Avenue, Springfield".to_string(),
            phone: "555-0190".to_string(),
            email: "wei.chen@example.com".to_string(),
            emergency_contact: EmergencyContact {
                name: "Wei Chen".to_string(),
                relationship: "Mother".to_string(),
                phone: "555-0191".to_string(),
            },
            medical_history: Some(MedicalHistory::default()),
            insurance_details: None,
            status: PatientStatus::Active,
            registered_date: day(2025, 9, 1),
        },
    ]
}

// ── Doctors ──────────────────────────────────────────────────────────────────

pub fn mock_doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: DoctorId::new("d1"),
            name: "Dr. John Smith".to_string(),
            gender: Gender::Male,
            department: "Cardiology".to_string(),
            specialization: "Interventional Cardiology".to_string(),
            qualification: "MD, FACC".to_string(),
            experience: 15,
            phone: "555-0201".to_string(),
            email: "j.smith@hospital.example".to_string(),
            address: "Cardiology Wing, Floor 3".to_string(),
            availability: Availability {
                days: weekdays(),
                start_time: "09:00 AM".to_string(),
                end_time: "04:00 PM".to_string(),
            },
            status: DoctorStatus::Active,
            joining_date: day(2015, 3, 1),
        },
        Doctor {
            id: DoctorId::new("d2"),
            name: "Dr. Sarah Johnson".to_string(),
            gender: Gender::Female,
            department: "Neurology".to_string(),
            specialization: "Headache Medicine".to_string(),
            qualification: "MD, PhD".to_string(),
            experience: 11,
            phone: "555-0202".to_string(),
            email: "s.johnson@hospital.example".to_string(),
            address: "Neurology Wing, Floor 4".to_string(),
            availability: Availability {
                days: vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
                start_time: "10:00 AM".to_string(),
                end_time: "03:00 PM".to_string(),
            },
            status: DoctorStatus::Active,
            joining_date: day(2018, 9, 15),
        },
        Doctor {
            id: DoctorId::new("d3"),
            name: "Dr. Michael Brown".to_string(),
            gender: Gender::Male,
            department: "Pediatrics".to_string(),
            specialization: "General Pediatrics".to_string(),
            qualification: "MD, FAAP".to_string(),
            experience: 8,
            phone: "555-0203".to_string(),
            email: "m.brown@hospital.example".to_string(),
            address: "Children's Clinic, Floor 1".to_string(),
            availability: Availability {
                days: weekdays(),
                start_time: "09:00 AM".to_string(),
                end_time: "01:00 PM".to_string(),
            },
            status: DoctorStatus::OnLeave,
            joining_date: day(2020, 1, 6),
        },
        Doctor {
            id: DoctorId::new("d4"),
            name: "Dr. Emily Davis".to_string(),
            gender: Gender::Female,
            department: "Orthopedics".to_string(),
            specialization: "Sports Medicine".to_string(),
            qualification: "MD, MS Ortho".to_string(),
            experience: 12,
            phone: "555-0204".to_string(),
            email: "e.davis@hospital.example".to_string(),
            address: "Orthopedics Wing, Floor 2".to_string(),
            availability: Availability {
                days: vec![Weekday::Tue, Weekday::Thu],
                start_time: "01:00 PM".to_string(),
                end_time: "04:00 PM".to_string(),
            },
            status: DoctorStatus::Active,
            joining_date: day(2016, 7, 11),
        },
    ]
}

// ── Appointments ─────────────────────────────────────────────────────────────

fn appointment(
    id: &str,
    patient: (&str, &str),
    doctor: (&str, &str),
    date: NaiveDate,
    time: &str,
    service: &str,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        id: AppointmentId::new(id),
        patient_id: PatientId::new(patient.0),
        patient_name: patient.1.to_string(),
        doctor_id: DoctorId::new(doctor.0),
        doctor_name: doctor.1.to_string(),
        date,
        time: time.to_string(),
        duration: 30,
        service: service.to_string(),
        notes: String::new(),
        status,
        created_at: stamp(2026, 10, 1),
    }
}

pub fn mock_appointments() -> Vec<Appointment> {
    let mut follow_up = appointment(
        "APT002",
        ("P002", "Jane Smith"),
        ("d2", "Dr. Sarah Johnson"),
        day(2026, 10, 14),
        "10:00 AM",
        "Follow-up Visit",
        AppointmentStatus::Completed,
    );
    follow_up.duration = 45;
    follow_up.notes = "Review migraine diary".to_string();

    vec![
        appointment(
            "APT001",
            ("P001", "John Smith"),
            ("d1", "Dr. John Smith"),
            day(2026, 10, 19),
            "09:00 AM",
            "General Checkup",
            AppointmentStatus::Scheduled,
        ),
        follow_up,
        appointment(
            "APT003",
            ("P003", "Maria Garcia"),
            ("d4", "Dr. Emily Davis"),
            day(2026, 10, 20),
            "01:30 PM",
            "Specialist Consultation",
            AppointmentStatus::Scheduled,
        ),
        appointment(
            "APT004",
            ("P004", "Ahmed Khan"),
            ("d1", "Dr. John Smith"),
            day(2026, 10, 12),
            "11:00 AM",
            "Diagnostic Test",
            AppointmentStatus::NoShow,
        ),
        appointment(
            "APT005",
            ("P005", "Emily Chen"),
            ("d3", "Dr. Michael Brown"),
            day(2026, 10, 16),
            "09:30 AM",
            "Vaccination",
            AppointmentStatus::Cancelled,
        ),
    ]
}

// ── Bills ────────────────────────────────────────────────────────────────────

pub fn mock_bills() -> Vec<Bill> {
    let consult = vec![
        BillItem::new("1", "Cardiology consultation", 1, 150.0, BillCategory::Consultation),
        BillItem::new("2", "ECG", 1, 80.0, BillCategory::Lab),
    ];
    let neuro = vec![
        BillItem::new("1", "Neurology follow-up", 1, 120.0, BillCategory::Consultation),
        BillItem::new("2", "Sumatriptan 50mg", 6, 4.5, BillCategory::Medication),
    ];
    let labs = vec![
        BillItem::new("1", "HbA1c panel", 1, 45.0, BillCategory::Lab),
        BillItem::new("2", "Blood draw", 1, 15.0, BillCategory::Procedure),
    ];

    vec![
        Bill {
            id: BillId::new("INV-1001"),
            patient_id: PatientId::new("P001"),
            patient_name: "John Smith".to_string(),
            doctor_id: Some(DoctorId::new("d1")),
            doctor_name: Some("Dr. John Smith".to_string()),
            date: day(2026, 9, 28),
            items: consult,
            subtotal: 230.0,
            discount: None,
            tax: Some(18.4),
            total: 248.4,
            payment_status: PaymentStatus::Paid,
            payment_method: Some(PaymentMethod::Card),
            notes: None,
            created_at: stamp(2026, 9, 28),
        },
        Bill {
            id: BillId::new("INV-1002"),
            patient_id: PatientId::new("P002"),
            patient_name: "Jane Smith".to_string(),
            doctor_id: Some(DoctorId::new("d2")),
            doctor_name: Some("Dr. Sarah Johnson".to_string()),
            date: day(2026, 10, 14),
            items: neuro,
            subtotal: 147.0,
            discount: Some(10.0),
            tax: None,
            total: 137.0,
            payment_status: PaymentStatus::Pending,
            payment_method: None,
            notes: Some("Insurance claim not yet filed".to_string()),
            created_at: stamp(2026, 10, 14),
        },
        Bill {
            id: BillId::new("INV-1003"),
            patient_id: PatientId::new("P004"),
            patient_name: "Ahmed Khan".to_string(),
            doctor_id: None,
            doctor_name: None,
            date: day(2026, 8, 30),
            items: labs,
            subtotal: 60.0,
            discount: None,
            tax: None,
            total: 60.0,
            payment_status: PaymentStatus::Overdue,
            payment_method: Some(PaymentMethod::BankTransfer),
            notes: None,
            created_at: stamp(2026, 8, 30),
        },
    ]
}

// ── Prescriptions ────────────────────────────────────────────────────────────

pub fn mock_prescriptions() -> Vec<Prescription> {
    vec![
        Prescription {
            id: PrescriptionId::new("RX-2001"),
            patient_id: PatientId::new("P001"),
            patient_name: "John Smith".to_string(),
            doctor_id: DoctorId::new("d1"),
            doctor_name: "Dr. John Smith".to_string(),
            date: day(2026, 9, 28),
            diagnosis: "Essential hypertension".to_string(),
            medications: vec![Medication {
                name: "Lisinopril".to_string(),
                dosage: "10mg".to_string(),
                frequency: "Once daily".to_string(),
                duration: "90 days".to_string(),
                instructions: Some("Take in the morning".to_string()),
            }],
            instructions: Some("Reduce salt intake".to_string()),
            follow_up: Some(FollowUp {
                date: day(2026, 12, 28),
                notes: "Blood pressure review".to_string(),
            }),
            created_at: stamp(2026, 9, 28),
        },
        Prescription {
            id: PrescriptionId::new("RX-2002"),
            patient_id: PatientId::new("P002"),
            patient_name: "Jane Smith".to_string(),
            doctor_id: DoctorId::new("d2"),
            doctor_name: "Dr. Sarah Johnson".to_string(),
            date: day(2026, 10, 14),
            diagnosis: "Chronic migraine".to_string(),
            medications: vec![
                Medication {
                    name: "Sumatriptan".to_string(),
                    dosage: "50mg".to_string(),
                    frequency: "At onset, max twice daily".to_string(),
                    duration: "30 days".to_string(),
                    instructions: None,
                },
                Medication {
                    name: "Propranolol".to_string(),
                    dosage: "40mg".to_string(),
                    frequency: "Twice daily".to_string(),
                    duration: "30 days".to_string(),
                    instructions: Some("Do not stop abruptly".to_string()),
                },
            ],
            instructions: None,
            follow_up: None,
            created_at: stamp(2026, 10, 14),
        },
        Prescription {
            id: PrescriptionId::new("RX-2003"),
            patient_id: PatientId::new("P004"),
            patient_name: "Ahmed Khan".to_string(),
            doctor_id: DoctorId::new("d4"),
            doctor_name: "Dr. Emily Davis".to_string(),
            date: day(2026, 8, 30),
            diagnosis: "Knee osteoarthritis".to_string(),
            medications: vec![Medication {
                name: "Ibuprofen".to_string(),
                dosage: "400mg".to_string(),
                frequency: "Three times daily with food".to_string(),
                duration: "14 days".to_string(),
                instructions: None,
            }],
            instructions: Some("Physiotherapy twice weekly".to_string()),
            follow_up: None,
            created_at: stamp(2026, 8, 30),
        },
    ]
}
