use crate::patient::PatientRecord;

/// One CT series listed for the imaging viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagingStudy {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub findings: String,
}

impl ImagingStudy {
    fn new(id: &str, name: &str, kind: &str, findings: String) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: kind.to_string(),
            findings,
        }
    }
}

/// Three standard pancreatic series; a condition mentioning a mass rewrites
/// the first finding and adds a volume rendering.
pub fn build_studies(patient: &PatientRecord) -> Vec<ImagingStudy> {
    let mass = patient.has_condition("mass");
    let axial_findings = if mass {
        "Pancreatic mass identified - detailed morphological analysis".to_string()
    } else {
        format!(
            "Pancreatic assessment for {}",
            patient.name.as_deref().unwrap_or("patient")
        )
    };

    let mut studies = vec![
        ImagingStudy::new(
            "ct_001",
            "Axial CT - Upper Abdomen",
            "Contrast Enhanced",
            axial_findings,
        ),
        ImagingStudy::new(
            "ct_002",
            "Coronal CT - Pancreas",
            "Arterial Phase",
            "Vascular involvement assessment".to_string(),
        ),
        ImagingStudy::new(
            "ct_003",
            "Sagittal CT - Pancreas",
            "Portal Venous Phase",
            "Staging evaluation and analysis".to_string(),
        ),
    ];
    if mass {
        studies.push(ImagingStudy::new(
            "ct_004",
            "3D Reconstruction",
            "Volume Rendering",
            "3D visualization of pancreatic mass".to_string(),
        ));
    }
    studies
}
