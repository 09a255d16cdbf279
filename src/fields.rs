//! Form Field Keys
//!
//! Closed set of addressable fields with their wire names and labels.

/// One parent column of the form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parent {
    Father,
    Mother,
}

impl Parent {
    pub fn title(self) -> &'static str {
        match self {
            Parent::Father => "Father",
            Parent::Mother => "Mother",
        }
    }
}

/// Fields repeated for father and mother
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParentField {
    Name,
    Dob,
    Qualification,
    MotherTongue,
    Designation,
    OfficeAddress,
    TelephoneRes,
    TelephoneOffice,
    Mobile,
    Email,
}

impl ParentField {
    pub const ALL: [ParentField; 10] = [
        ParentField::Name,
        ParentField::Dob,
        ParentField::Qualification,
        ParentField::MotherTongue,
        ParentField::Designation,
        ParentField::OfficeAddress,
        ParentField::TelephoneRes,
        ParentField::TelephoneOffice,
        ParentField::Mobile,
        ParentField::Email,
    ];

    /// (father, mother) wire names
    fn wire_names(self) -> (&'static str, &'static str) {
        match self {
            ParentField::Name => ("fatherName", "motherName"),
            ParentField::Dob => ("fatherDob", "motherDob"),
            ParentField::Qualification => ("fatherQualification", "motherQualification"),
            ParentField::MotherTongue => ("fatherMotherTongue", "motherMotherTongue"),
            ParentField::Designation => ("fatherDesignation", "motherDesignation"),
            ParentField::OfficeAddress => ("fatherOfficeAddress", "motherOfficeAddress"),
            ParentField::TelephoneRes => ("fatherTelephoneRes", "motherTelephoneRes"),
            ParentField::TelephoneOffice => ("fatherTelephoneOffice", "motherTelephoneOffice"),
            ParentField::Mobile => ("fatherMobile", "motherMobile"),
            ParentField::Email => ("fatherEmail", "motherEmail"),
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ParentField::Name => "Name in full",
            ParentField::Dob => "dd/mm/yyyy",
            ParentField::Qualification => "Qualification",
            ParentField::MotherTongue => "Mother Tongue",
            ParentField::Designation => "Designation",
            ParentField::OfficeAddress => "Office Address",
            ParentField::TelephoneRes => "Telephone (Res)",
            ParentField::TelephoneOffice => "Telephone (Office)",
            ParentField::Mobile => "Mobile Number",
            ParentField::Email => "Email ID",
        }
    }
}

/// Every text-valued field of the application record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextField {
    // Office use
    RegistrationNo,
    AdmFileNo,
    TcFileNo,
    DateOfAdmission,
    SchoolLocation,
    ClassName,
    Curriculum,
    // Student
    FirstName,
    MiddleName,
    LastName,
    Dob,
    PlaceOfBirth,
    Gender,
    Religion,
    Nationality,
    Caste,
    Address,
    Telephone,
    HealthInfo,
    // Parents
    Father(ParentField),
    Mother(ParentField),
    // Previous school
    PrevSchoolName,
    PrevSchoolLocation,
    PrevClassCompleted,
    PrevYearsAttended,
    PrevLanguage,
    PrevCurriculum,
    // Emergency contact
    EmergencyName,
    EmergencyRelationship,
    EmergencyContact,
    EmergencyAddress,
}

/// Fields that are not per-parent, in wire order
const SINGLE_FIELDS: [TextField; 29] = [
    TextField::RegistrationNo,
    TextField::AdmFileNo,
    TextField::TcFileNo,
    TextField::DateOfAdmission,
    TextField::SchoolLocation,
    TextField::ClassName,
    TextField::Curriculum,
    TextField::FirstName,
    TextField::MiddleName,
    TextField::LastName,
    TextField::Dob,
    TextField::PlaceOfBirth,
    TextField::Gender,
    TextField::Religion,
    TextField::Nationality,
    TextField::Caste,
    TextField::Address,
    TextField::Telephone,
    TextField::HealthInfo,
    TextField::PrevSchoolName,
    TextField::PrevSchoolLocation,
    TextField::PrevClassCompleted,
    TextField::PrevYearsAttended,
    TextField::PrevLanguage,
    TextField::PrevCurriculum,
    TextField::EmergencyName,
    TextField::EmergencyRelationship,
    TextField::EmergencyContact,
    TextField::EmergencyAddress,
];

pub const TEXT_FIELD_COUNT: usize = SINGLE_FIELDS.len() + 2 * ParentField::ALL.len();

impl TextField {
    pub fn parent(parent: Parent, field: ParentField) -> Self {
        match parent {
            Parent::Father => TextField::Father(field),
            Parent::Mother => TextField::Mother(field),
        }
    }

    /// All text fields, father then mother after the single fields
    pub fn all() -> impl Iterator<Item = TextField> {
        SINGLE_FIELDS
            .into_iter()
            .chain(ParentField::ALL.into_iter().map(TextField::Father))
            .chain(ParentField::ALL.into_iter().map(TextField::Mother))
    }

    /// JSON key used by the submission endpoint
    pub fn wire_name(self) -> &'static str {
        match self {
            TextField::RegistrationNo => "registrationNo",
            TextField::AdmFileNo => "admFileNo",
            TextField::TcFileNo => "tcFileNo",
            TextField::DateOfAdmission => "dateOfAdmission",
            TextField::SchoolLocation => "schoolLocation",
            TextField::ClassName => "className",
            TextField::Curriculum => "curriculum",
            TextField::FirstName => "firstName",
            TextField::MiddleName => "middleName",
            TextField::LastName => "lastName",
            TextField::Dob => "dob",
            TextField::PlaceOfBirth => "placeOfBirth",
            TextField::Gender => "gender",
            TextField::Religion => "religion",
            TextField::Nationality => "nationality",
            TextField::Caste => "caste",
            TextField::Address => "address",
            TextField::Telephone => "telephone",
            TextField::HealthInfo => "healthInfo",
            TextField::Father(f) => f.wire_names().0,
            TextField::Mother(f) => f.wire_names().1,
            TextField::PrevSchoolName => "prevSchoolName",
            TextField::PrevSchoolLocation => "prevSchoolLocation",
            TextField::PrevClassCompleted => "prevClassCompleted",
            TextField::PrevYearsAttended => "prevYearsAttended",
            TextField::PrevLanguage => "prevLanguage",
            TextField::PrevCurriculum => "prevCurriculum",
            TextField::EmergencyName => "emergencyName",
            TextField::EmergencyRelationship => "emergencyRelationship",
            TextField::EmergencyContact => "emergencyContact",
            TextField::EmergencyAddress => "emergencyAddress",
        }
    }

    /// Label shown next to the control
    pub fn label(self) -> &'static str {
        match self {
            TextField::RegistrationNo => "Registration No.",
            TextField::AdmFileNo => "Adm. File No.",
            TextField::TcFileNo => "T.C. File No.",
            TextField::DateOfAdmission => "Date of Admission",
            TextField::SchoolLocation => "School Location",
            TextField::ClassName => "Class",
            TextField::Curriculum => "Curriculum",
            TextField::FirstName => "First Name",
            TextField::MiddleName => "Middle Name",
            TextField::LastName => "Last Name",
            TextField::Dob => "Date of Birth",
            TextField::PlaceOfBirth => "Place of Birth",
            TextField::Gender => "Gender",
            TextField::Religion => "Religion",
            TextField::Nationality => "Nationality",
            TextField::Caste => "Caste Category",
            TextField::Address => "Address For Communication",
            TextField::Telephone => "Mobile Number",
            TextField::HealthInfo => "Health Information (allergies, medical conditions)",
            TextField::Father(f) | TextField::Mother(f) => f.placeholder(),
            TextField::PrevSchoolName => "Name of the last school attended",
            TextField::PrevSchoolLocation => "Location",
            TextField::PrevClassCompleted => "Class Completed",
            TextField::PrevYearsAttended => "Years attended",
            TextField::PrevLanguage => "Language of Instruction",
            TextField::PrevCurriculum => "Curriculum",
            TextField::EmergencyName => "Name",
            TextField::EmergencyRelationship => "Relationship",
            TextField::EmergencyContact => "Contact number in case of emergency",
            TextField::EmergencyAddress => "Address for emergency contact",
        }
    }
}

/// Columns of the previous-school table, in display order
pub const PREVIOUS_SCHOOL_COLUMNS: [TextField; 6] = [
    TextField::PrevSchoolName,
    TextField::PrevSchoolLocation,
    TextField::PrevClassCompleted,
    TextField::PrevYearsAttended,
    TextField::PrevLanguage,
    TextField::PrevCurriculum,
];

/// Documents checklist
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentFlag {
    BirthCert,
    LeavingCert,
    ReportCard,
    PassportPhotos,
    Aadhar,
}

impl DocumentFlag {
    pub const ALL: [DocumentFlag; 5] = [
        DocumentFlag::BirthCert,
        DocumentFlag::LeavingCert,
        DocumentFlag::ReportCard,
        DocumentFlag::PassportPhotos,
        DocumentFlag::Aadhar,
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            DocumentFlag::BirthCert => "docBirthCert",
            DocumentFlag::LeavingCert => "docLeavingCert",
            DocumentFlag::ReportCard => "docReportCard",
            DocumentFlag::PassportPhotos => "docPassportPhotos",
            DocumentFlag::Aadhar => "docAadhar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentFlag::BirthCert => "Photocopy of Birth Certificate",
            DocumentFlag::LeavingCert => "School Leaving Certificate (Original)",
            DocumentFlag::ReportCard => "Report Card (Original / Photocopy)",
            DocumentFlag::PassportPhotos => "3 Colour passport size photographs",
            DocumentFlag::Aadhar => "Aadhar Card Copy",
        }
    }
}

/// Gender select options as (value, label); empty value means unselected
pub const GENDER_OPTIONS: &[(&str, &str)] = &[
    ("", "Select"),
    ("Male", "Male"),
    ("Female", "Female"),
    ("Other", "Other"),
];

/// Caste category radio options
pub const CASTE_OPTIONS: &[&str] = &["ST", "SC", "OBC", "OTHERS"];
