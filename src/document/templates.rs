//! Document types and their templates.
//!
//! Each supported type carries a static [`TemplateSpec`]: display title,
//! signature roles, defaulted header fields, and the fixed clause list in
//! the order the assembled document presents them. One rendering path serves
//! every type; adding a type means adding a table entry.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DraftError;

/// Jurisdiction and tone applied to every generated clause.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Customization {
    pub jurisdiction: String,
    pub tone: String,
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            jurisdiction: "Default Jurisdiction".to_string(),
            tone: "formal".to_string(),
        }
    }
}

/// A header field: request key, display label, and fallback value used when
/// the request omits the field or sends it blank.
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub default: &'static str,
}

/// Static description of one document type.
pub struct TemplateSpec {
    pub title: &'static str,
    pub roles: &'static [&'static str],
    pub fields: &'static [FieldSpec],
    pub clauses: &'static [&'static str],
}

const EFFECTIVE_DATE: FieldSpec = FieldSpec {
    name: "EFFECTIVE_DATE",
    label: "Effective Date",
    default: "2025-01-01",
};

static NDA: TemplateSpec = TemplateSpec {
    title: "NON-DISCLOSURE AGREEMENT",
    roles: &["Party A", "Party B"],
    fields: &[
        EFFECTIVE_DATE,
        FieldSpec {
            name: "PARTY_A",
            label: "Party A",
            default: "Party A",
        },
        FieldSpec {
            name: "PARTY_B",
            label: "Party B",
            default: "Party B",
        },
    ],
    clauses: &["Confidentiality Clause", "Non-Use Clause", "Term Clause"],
};

static SERVICE_AGREEMENT: TemplateSpec = TemplateSpec {
    title: "SERVICE AGREEMENT",
    roles: &["Service Provider", "Client"],
    fields: &[
        EFFECTIVE_DATE,
        FieldSpec {
            name: "SERVICE_PROVIDER",
            label: "Service Provider",
            default: "Service Provider",
        },
        FieldSpec {
            name: "CLIENT",
            label: "Client",
            default: "Client",
        },
    ],
    clauses: &[
        "Scope of Services",
        "Payment Terms",
        "Confidentiality Clause",
        "Non-Compete Clause",
        "Intellectual Property Clause",
        "Indemnification Clause",
        "Termination Clause",
        "Dispute Resolution Clause",
    ],
};

static EMPLOYMENT_CONTRACT: TemplateSpec = TemplateSpec {
    title: "EMPLOYMENT CONTRACT",
    roles: &["Employer", "Employee"],
    fields: &[
        EFFECTIVE_DATE,
        FieldSpec {
            name: "EMPLOYER",
            label: "Employer",
            default: "Employer",
        },
        FieldSpec {
            name: "EMPLOYEE",
            label: "Employee",
            default: "Employee",
        },
    ],
    clauses: &[
        "Job Description",
        "Compensation",
        "Benefits",
        "Termination Clause",
        "Confidentiality Clause",
        "Non-Compete Clause",
    ],
};

static RENTAL_AGREEMENT: TemplateSpec = TemplateSpec {
    title: "RENTAL AGREEMENT",
    roles: &["Landlord", "Tenant"],
    fields: &[
        EFFECTIVE_DATE,
        FieldSpec {
            name: "LANDLORD",
            label: "Landlord",
            default: "Landlord",
        },
        FieldSpec {
            name: "TENANT",
            label: "Tenant",
            default: "Tenant",
        },
    ],
    clauses: &[
        "Premises Description",
        "Rent Payment",
        "Security Deposit",
        "Termination Clause",
        "Maintenance Responsibility",
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    Nda,
    ServiceAgreement,
    EmploymentContract,
    RentalAgreement,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Nda => "nda",
            DocumentType::ServiceAgreement => "service_agreement",
            DocumentType::EmploymentContract => "employment_contract",
            DocumentType::RentalAgreement => "rental_agreement",
        }
    }

    pub fn template(&self) -> &'static TemplateSpec {
        match self {
            DocumentType::Nda => &NDA,
            DocumentType::ServiceAgreement => &SERVICE_AGREEMENT,
            DocumentType::EmploymentContract => &EMPLOYMENT_CONTRACT,
            DocumentType::RentalAgreement => &RENTAL_AGREEMENT,
        }
    }
}

impl FromStr for DocumentType {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nda" => Ok(DocumentType::Nda),
            "service_agreement" => Ok(DocumentType::ServiceAgreement),
            "employment_contract" => Ok(DocumentType::EmploymentContract),
            "rental_agreement" => Ok(DocumentType::RentalAgreement),
            other => Err(DraftError::UnsupportedDocumentType(other.to_string())),
        }
    }
}

/// Render the document header: title, header fields, jurisdiction and tone,
/// closed by a rule. Missing or blank fields fall back to their defaults.
pub fn render_header(
    doc_type: DocumentType,
    details: &HashMap<String, String>,
    customization: &Customization,
) -> String {
    let template = doc_type.template();
    let mut header = format!("<h2>{}</h2>", template.title);

    for field in template.fields {
        let value = details
            .get(field.name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(field.default);
        header.push_str(&format!(
            "<p><strong>{}:</strong> {}</p>",
            field.label, value
        ));
    }

    header.push_str(&format!(
        "<p><strong>Jurisdiction:</strong> {}</p>",
        customization.jurisdiction
    ));
    header.push_str(&format!(
        "<p><strong>Tone:</strong> {}</p>",
        customization.tone
    ));
    header.push_str("<hr>");
    header
}

/// Render the signature block: one line per role, then date and witness.
pub fn render_signature_block(doc_type: DocumentType) -> String {
    let template = doc_type.template();
    let mut block = String::from("<h4>Signatures</h4>");
    for role in template.roles {
        block.push_str(&format!(
            "<p>{} Signature: ______________________</p>",
            role
        ));
    }
    block.push_str("<p>Date: ______________________</p>");
    block.push_str("<p>Witness: ______________________</p>");
    block
}
