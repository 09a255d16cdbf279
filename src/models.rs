//! Application Record
//!
//! Grouped form data. Serialized as the flat camelCase object the
//! submission endpoint expects.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::fields::{DocumentFlag, ParentField, TextField, TEXT_FIELD_COUNT};

/// Wire name of the photo field
pub const PHOTO_WIRE_NAME: &str = "photoDataUrl";

/// Filled in by the school office
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfficeUse {
    pub registration_no: String,
    pub adm_file_no: String,
    pub tc_file_no: String,
    pub date_of_admission: String,
    pub school_location: String,
    pub class_name: String,
    pub curriculum: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDetails {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub dob: String,
    pub place_of_birth: String,
    pub gender: String,
    pub religion: String,
    pub nationality: String,
    pub caste: String,
    pub address: String,
    pub telephone: String,
    pub health_info: String,
}

/// Father or mother column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentDetails {
    pub name: String,
    /// Free text, hinted as dd/mm/yyyy
    pub dob: String,
    pub qualification: String,
    pub mother_tongue: String,
    pub designation: String,
    pub office_address: String,
    pub telephone_res: String,
    pub telephone_office: String,
    pub mobile: String,
    pub email: String,
}

impl ParentDetails {
    fn slot(&self, field: ParentField) -> &String {
        match field {
            ParentField::Name => &self.name,
            ParentField::Dob => &self.dob,
            ParentField::Qualification => &self.qualification,
            ParentField::MotherTongue => &self.mother_tongue,
            ParentField::Designation => &self.designation,
            ParentField::OfficeAddress => &self.office_address,
            ParentField::TelephoneRes => &self.telephone_res,
            ParentField::TelephoneOffice => &self.telephone_office,
            ParentField::Mobile => &self.mobile,
            ParentField::Email => &self.email,
        }
    }

    fn slot_mut(&mut self, field: ParentField) -> &mut String {
        match field {
            ParentField::Name => &mut self.name,
            ParentField::Dob => &mut self.dob,
            ParentField::Qualification => &mut self.qualification,
            ParentField::MotherTongue => &mut self.mother_tongue,
            ParentField::Designation => &mut self.designation,
            ParentField::OfficeAddress => &mut self.office_address,
            ParentField::TelephoneRes => &mut self.telephone_res,
            ParentField::TelephoneOffice => &mut self.telephone_office,
            ParentField::Mobile => &mut self.mobile,
            ParentField::Email => &mut self.email,
        }
    }
}

/// Last school attended
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviousSchool {
    pub name: String,
    pub location: String,
    pub class_completed: String,
    pub years_attended: String,
    pub language: String,
    pub curriculum: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmergencyContact {
    pub name: String,
    pub relationship: String,
    pub contact: String,
    pub address: String,
}

/// Which documents will be handed in with the application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentChecklist {
    pub birth_cert: bool,
    pub leaving_cert: bool,
    pub report_card: bool,
    pub passport_photos: bool,
    pub aadhar: bool,
}

impl DocumentChecklist {
    fn slot_mut(&mut self, flag: DocumentFlag) -> &mut bool {
        match flag {
            DocumentFlag::BirthCert => &mut self.birth_cert,
            DocumentFlag::LeavingCert => &mut self.leaving_cert,
            DocumentFlag::ReportCard => &mut self.report_card,
            DocumentFlag::PassportPhotos => &mut self.passport_photos,
            DocumentFlag::Aadhar => &mut self.aadhar,
        }
    }

    pub fn get(&self, flag: DocumentFlag) -> bool {
        match flag {
            DocumentFlag::BirthCert => self.birth_cert,
            DocumentFlag::LeavingCert => self.leaving_cert,
            DocumentFlag::ReportCard => self.report_card,
            DocumentFlag::PassportPhotos => self.passport_photos,
            DocumentFlag::Aadhar => self.aadhar,
        }
    }
}

/// Complete admission application. `Default` is the empty baseline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationRecord {
    pub office: OfficeUse,
    pub student: StudentDetails,
    pub father: ParentDetails,
    pub mother: ParentDetails,
    pub previous_school: PreviousSchool,
    pub emergency_contact: EmergencyContact,
    pub documents: DocumentChecklist,
    /// `data:<mime>;base64,...` of the student photo
    pub photo_data_url: Option<String>,
}

impl ApplicationRecord {
    fn slot(&self, field: TextField) -> &String {
        match field {
            TextField::RegistrationNo => &self.office.registration_no,
            TextField::AdmFileNo => &self.office.adm_file_no,
            TextField::TcFileNo => &self.office.tc_file_no,
            TextField::DateOfAdmission => &self.office.date_of_admission,
            TextField::SchoolLocation => &self.office.school_location,
            TextField::ClassName => &self.office.class_name,
            TextField::Curriculum => &self.office.curriculum,
            TextField::FirstName => &self.student.first_name,
            TextField::MiddleName => &self.student.middle_name,
            TextField::LastName => &self.student.last_name,
            TextField::Dob => &self.student.dob,
            TextField::PlaceOfBirth => &self.student.place_of_birth,
            TextField::Gender => &self.student.gender,
            TextField::Religion => &self.student.religion,
            TextField::Nationality => &self.student.nationality,
            TextField::Caste => &self.student.caste,
            TextField::Address => &self.student.address,
            TextField::Telephone => &self.student.telephone,
            TextField::HealthInfo => &self.student.health_info,
            TextField::Father(f) => self.father.slot(f),
            TextField::Mother(f) => self.mother.slot(f),
            TextField::PrevSchoolName => &self.previous_school.name,
            TextField::PrevSchoolLocation => &self.previous_school.location,
            TextField::PrevClassCompleted => &self.previous_school.class_completed,
            TextField::PrevYearsAttended => &self.previous_school.years_attended,
            TextField::PrevLanguage => &self.previous_school.language,
            TextField::PrevCurriculum => &self.previous_school.curriculum,
            TextField::EmergencyName => &self.emergency_contact.name,
            TextField::EmergencyRelationship => &self.emergency_contact.relationship,
            TextField::EmergencyContact => &self.emergency_contact.contact,
            TextField::EmergencyAddress => &self.emergency_contact.address,
        }
    }

    fn slot_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::RegistrationNo => &mut self.office.registration_no,
            TextField::AdmFileNo => &mut self.office.adm_file_no,
            TextField::TcFileNo => &mut self.office.tc_file_no,
            TextField::DateOfAdmission => &mut self.office.date_of_admission,
            TextField::SchoolLocation => &mut self.office.school_location,
            TextField::ClassName => &mut self.office.class_name,
            TextField::Curriculum => &mut self.office.curriculum,
            TextField::FirstName => &mut self.student.first_name,
            TextField::MiddleName => &mut self.student.middle_name,
            TextField::LastName => &mut self.student.last_name,
            TextField::Dob => &mut self.student.dob,
            TextField::PlaceOfBirth => &mut self.student.place_of_birth,
            TextField::Gender => &mut self.student.gender,
            TextField::Religion => &mut self.student.religion,
            TextField::Nationality => &mut self.student.nationality,
            TextField::Caste => &mut self.student.caste,
            TextField::Address => &mut self.student.address,
            TextField::Telephone => &mut self.student.telephone,
            TextField::HealthInfo => &mut self.student.health_info,
            TextField::Father(f) => self.father.slot_mut(f),
            TextField::Mother(f) => self.mother.slot_mut(f),
            TextField::PrevSchoolName => &mut self.previous_school.name,
            TextField::PrevSchoolLocation => &mut self.previous_school.location,
            TextField::PrevClassCompleted => &mut self.previous_school.class_completed,
            TextField::PrevYearsAttended => &mut self.previous_school.years_attended,
            TextField::PrevLanguage => &mut self.previous_school.language,
            TextField::PrevCurriculum => &mut self.previous_school.curriculum,
            TextField::EmergencyName => &mut self.emergency_contact.name,
            TextField::EmergencyRelationship => &mut self.emergency_contact.relationship,
            TextField::EmergencyContact => &mut self.emergency_contact.contact,
            TextField::EmergencyAddress => &mut self.emergency_contact.address,
        }
    }

    pub fn text(&self, field: TextField) -> &str {
        self.slot(field)
    }

    /// Replace one text field, accepting any value as-is
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn document(&self, flag: DocumentFlag) -> bool {
        self.documents.get(flag)
    }

    pub fn set_document(&mut self, flag: DocumentFlag, checked: bool) {
        *self.documents.slot_mut(flag) = checked;
    }

    /// First and last name are both non-blank after trimming
    pub fn has_required_names(&self) -> bool {
        !self.student.first_name.trim().is_empty() && !self.student.last_name.trim().is_empty()
    }

    /// JSON body for the submission endpoint
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Serialize for ApplicationRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TEXT_FIELD_COUNT + DocumentFlag::ALL.len() + 1))?;
        for field in TextField::all() {
            map.serialize_entry(field.wire_name(), self.text(field))?;
        }
        for flag in DocumentFlag::ALL {
            map.serialize_entry(flag.wire_name(), &self.document(flag))?;
        }
        map.serialize_entry(PHOTO_WIRE_NAME, &self.photo_data_url)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_set_text_touches_only_one_field() {
        let mut record = ApplicationRecord::default();
        record.set_text(TextField::Father(ParentField::Mobile), "9876543210");

        let mut expected = ApplicationRecord::default();
        expected.father.mobile = "9876543210".to_string();
        assert_eq!(record, expected);
        assert_eq!(record.text(TextField::Mother(ParentField::Mobile)), "");
    }

    #[test]
    fn test_text_accepts_malformed_values() {
        let mut record = ApplicationRecord::default();
        record.set_text(TextField::Father(ParentField::Dob), "31/02/not-a-year");
        record.set_text(TextField::Telephone, "call me");
        assert_eq!(record.text(TextField::Father(ParentField::Dob)), "31/02/not-a-year");
        assert_eq!(record.text(TextField::Telephone), "call me");
    }

    #[test]
    fn test_every_field_round_trips_through_accessors() {
        let mut record = ApplicationRecord::default();
        for field in TextField::all() {
            record.set_text(field, field.wire_name());
        }
        for field in TextField::all() {
            assert_eq!(record.text(field), field.wire_name());
        }
    }

    #[test]
    fn test_documents() {
        let mut record = ApplicationRecord::default();
        record.set_document(DocumentFlag::Aadhar, true);
        assert!(record.document(DocumentFlag::Aadhar));
        assert!(!record.document(DocumentFlag::BirthCert));
        record.set_document(DocumentFlag::Aadhar, false);
        assert_eq!(record.documents, DocumentChecklist::default());
    }

    #[test]
    fn test_required_names() {
        let mut record = ApplicationRecord::default();
        assert!(!record.has_required_names());

        record.set_text(TextField::FirstName, "Asha");
        assert!(!record.has_required_names());

        record.set_text(TextField::LastName, "   ");
        assert!(!record.has_required_names());

        record.set_text(TextField::LastName, " Patil ");
        assert!(record.has_required_names());
    }

    #[test]
    fn test_empty_record_serializes_flat() {
        let json: Value = serde_json::from_str(&ApplicationRecord::default().to_json().unwrap()).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), TEXT_FIELD_COUNT + 6);
        assert_eq!(obj["firstName"], Value::String(String::new()));
        assert_eq!(obj["fatherEmail"], Value::String(String::new()));
        assert_eq!(obj["docBirthCert"], Value::Bool(false));
        assert_eq!(obj["photoDataUrl"], Value::Null);
    }

    #[test]
    fn test_filled_record_serializes_values() {
        let mut record = ApplicationRecord::default();
        record.set_text(TextField::FirstName, "Asha");
        record.set_text(TextField::Mother(ParentField::Name), "Sunita Patil");
        record.set_text(TextField::PrevCurriculum, "CBSE");
        record.set_document(DocumentFlag::ReportCard, true);
        record.photo_data_url = Some("data:image/png;base64,iVBORw0KGgo=".to_string());

        let json: Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(json["firstName"], "Asha");
        assert_eq!(json["motherName"], "Sunita Patil");
        assert_eq!(json["prevCurriculum"], "CBSE");
        assert_eq!(json["docReportCard"], true);
        assert_eq!(json["photoDataUrl"], "data:image/png;base64,iVBORw0KGgo=");
    }
}
