//! Fixed tables offered by the form's dropdowns. Client-side enumerations
//! only — the server accepts any position string it is sent.

pub const JOB_POSITIONS: &[&str] = &[
    "Behavior Consultant (BC)",
    "Mobile Therapist (MT)",
    "Registered Behavior Technician (RBT)",
    "Behavior Technician (BT)",
    "Administration",
];

pub const LOCATIONS: &[&str] = &[
    "Bala Cynwyd Office",
    "Philadelphia Office",
    "South Philadelphia Satellite Office",
];
