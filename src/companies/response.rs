//! # Response Formatting
//!
//! Envelopes wrapping company payloads.

use serde::Serialize;

use super::model::{Company, CompanySummary};

/// `{"companies": [{code, name}, ...]}`
#[derive(Debug, Clone, Serialize)]
pub struct CompaniesResponse {
    pub companies: Vec<CompanySummary>,
}

impl CompaniesResponse {
    pub fn new(companies: Vec<CompanySummary>) -> Self {
        Self { companies }
    }
}

/// `{"company": {code, name, description}}`
#[derive(Debug, Clone, Serialize)]
pub struct CompanyResponse {
    pub company: Company,
}

impl CompanyResponse {
    pub fn new(company: Company) -> Self {
        Self { company }
    }
}

/// `{"status": "deleted"}`
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn deleted() -> Self {
        Self { status: "deleted" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_companies_response_serialization() {
        let response = CompaniesResponse::new(vec![
            CompanySummary {
                code: "apple".to_string(),
                name: "Apple Computer".to_string(),
            },
            CompanySummary {
                code: "ibm".to_string(),
                name: "IBM".to_string(),
            },
        ]);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["companies"].as_array().unwrap().len(), 2);
        assert_eq!(json["companies"][1]["code"], "ibm");
        assert!(json["companies"][0].get("description").is_none());
    }

    #[test]
    fn test_company_response_keeps_null_description() {
        let response = CompanyResponse::new(Company {
            code: "ibm".to_string(),
            name: "IBM".to_string(),
            description: None,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            json!({"company": {"code": "ibm", "name": "IBM", "description": null}})
        );
    }

    #[test]
    fn test_deleted_status() {
        let json = serde_json::to_value(StatusResponse::deleted()).unwrap();
        assert_eq!(json, json!({"status": "deleted"}));
    }
}
