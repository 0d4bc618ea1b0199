//! Folder literals for the document-processing API
//!
//! Each builder is a stateless constructor: same output every call, no
//! inputs. Request names, sample values and filter defaults are what the
//! Postman UI shows, so keep them stable.

use crate::models::{Folder, HttpMethod, QueryParam, Request, RequestItem, Url, Variable};
use serde_json::json;

/// Folder builders in insertion order
pub fn new_folders() -> Vec<Folder> {
    vec![
        invoice_folder(),
        resume_folder(),
        contract_folder(),
        receipt_folder(),
    ]
}

/// Id placeholders referenced by the inserted request URLs
pub fn new_variables() -> Vec<Variable> {
    ["invoiceId", "resumeId", "contractId", "receiptId"]
        .into_iter()
        .map(Variable::string)
        .collect()
}

fn paging() -> Vec<QueryParam> {
    vec![
        QueryParam::enabled("page", "1"),
        QueryParam::enabled("limit", "20"),
    ]
}

fn get(name: &str, url: Url, description: &str) -> RequestItem {
    RequestItem::new(name, Request::new(HttpMethod::GET, url, description))
}

fn delete(name: &str, url: Url, description: &str) -> RequestItem {
    RequestItem::new(name, Request::new(HttpMethod::DELETE, url, description))
}

fn with_body(
    name: &str,
    method: HttpMethod,
    url: Url,
    payload: serde_json::Value,
    description: &str,
) -> RequestItem {
    RequestItem::new(
        name,
        Request::new(method, url, description).with_json_body(payload),
    )
}

/// `/api/<resource>/{{<id_var>}}`
fn by_id(resource: &str, id_var: &str) -> Url {
    let id = format!("{{{{{}}}}}", id_var);
    Url::new(&["api", resource, id.as_str()], Vec::new())
}

pub fn invoice_folder() -> Folder {
    let mut list_query = paging();
    list_query.extend([
        QueryParam::disabled("status", "pending"),
        QueryParam::disabled("vendor_name", ""),
        QueryParam::disabled("start_date", "2024-01-01"),
        QueryParam::disabled("end_date", "2024-12-31"),
        QueryParam::disabled("sort_by", "invoice_date"),
        QueryParam::disabled("sort_order", "DESC"),
    ]);

    Folder::new(
        "Invoices",
        "Invoice management endpoints with statistics and filtering",
        vec![
            get(
                "List Invoices",
                Url::new(&["api", "invoices"], list_query),
                "Get paginated list of invoices with filtering by status, vendor, and date range",
            ),
            get(
                "Get Invoice",
                by_id("invoices", "invoiceId"),
                "Get single invoice by ID with document details",
            ),
            with_body(
                "Update Invoice",
                HttpMethod::PUT,
                by_id("invoices", "invoiceId"),
                json!({
                    "status": "paid",
                    "total_amount": 1500.00,
                    "notes": "Payment received"
                }),
                "Update invoice fields",
            ),
            delete(
                "Delete Invoice",
                by_id("invoices", "invoiceId"),
                "Delete invoice",
            ),
            get(
                "Get Invoice Statistics",
                Url::new(
                    &["api", "invoices", "stats"],
                    vec![
                        QueryParam::disabled("start_date", "2024-01-01"),
                        QueryParam::disabled("end_date", "2024-12-31"),
                    ],
                ),
                "Get invoice statistics (total amount, count by status, by currency)",
            ),
        ],
    )
}

pub fn resume_folder() -> Folder {
    let mut list_query = paging();
    list_query.extend([
        QueryParam::disabled("candidate_name", ""),
        QueryParam::disabled("email", ""),
        QueryParam::disabled("min_experience", "2"),
        QueryParam::disabled("max_experience", "10"),
    ]);

    Folder::new(
        "Resumes",
        "Resume management with job matching algorithm",
        vec![
            get(
                "List Resumes",
                Url::new(&["api", "resumes"], list_query),
                "Get paginated list of resumes with filtering",
            ),
            get(
                "Get Resume",
                by_id("resumes", "resumeId"),
                "Get single resume with job matching data",
            ),
            with_body(
                "Update Resume",
                HttpMethod::PUT,
                by_id("resumes", "resumeId"),
                json!({
                    "candidate_name": "John Doe",
                    "candidate_email": "john@example.com",
                    "years_of_experience": 5
                }),
                "Update resume fields",
            ),
            delete(
                "Delete Resume",
                by_id("resumes", "resumeId"),
                "Delete resume",
            ),
            with_body(
                "Match Resume with Job",
                HttpMethod::POST,
                Url::new(&["api", "resumes", "{{resumeId}}", "match-job"], Vec::new()),
                json!({ "job_id": "job-uuid-here" }),
                "Match resume with job posting using weighted scoring algorithm (60% skills, 20% preferred, 20% experience)",
            ),
        ],
    )
}

pub fn contract_folder() -> Folder {
    let mut list_query = paging();
    list_query.extend([
        QueryParam::disabled("contract_type", ""),
        QueryParam::disabled("status", ""),
        QueryParam::disabled("min_risk_score", "0"),
        QueryParam::disabled("max_risk_score", "100"),
    ]);

    Folder::new(
        "Contracts",
        "Contract management with expiration tracking and risk assessment",
        vec![
            get(
                "List Contracts",
                Url::new(&["api", "contracts"], list_query),
                "Get paginated list of contracts with filtering",
            ),
            get(
                "Get Contract",
                by_id("contracts", "contractId"),
                "Get single contract by ID",
            ),
            with_body(
                "Update Contract",
                HttpMethod::PUT,
                by_id("contracts", "contractId"),
                json!({
                    "status": "active",
                    "risk_score": 45
                }),
                "Update contract fields",
            ),
            delete(
                "Delete Contract",
                by_id("contracts", "contractId"),
                "Delete contract",
            ),
            get(
                "Get Expiring Contracts",
                Url::new(
                    &["api", "contracts", "expiring"],
                    vec![QueryParam::described(
                        "days",
                        "30",
                        "Number of days to look ahead",
                    )],
                ),
                "Get contracts expiring soon with days until expiration calculated",
            ),
            get(
                "Get High-Risk Contracts",
                Url::new(
                    &["api", "contracts", "high-risk"],
                    vec![QueryParam::described(
                        "min_risk_score",
                        "70",
                        "Minimum risk score threshold",
                    )],
                ),
                "Get high-risk contracts above threshold",
            ),
        ],
    )
}

pub fn receipt_folder() -> Folder {
    let mut list_query = paging();
    list_query.extend([
        QueryParam::disabled("expense_category", ""),
        QueryParam::disabled("merchant_name", ""),
        QueryParam::disabled("is_business_expense", "true"),
        QueryParam::disabled("start_date", "2024-01-01"),
        QueryParam::disabled("end_date", "2024-12-31"),
    ]);

    Folder::new(
        "Receipts",
        "Receipt management with expense categorization and monthly reports",
        vec![
            get(
                "List Receipts",
                Url::new(&["api", "receipts"], list_query),
                "Get paginated list of receipts with filtering",
            ),
            get(
                "Get Receipt",
                by_id("receipts", "receiptId"),
                "Get single receipt by ID",
            ),
            with_body(
                "Update Receipt",
                HttpMethod::PUT,
                by_id("receipts", "receiptId"),
                json!({
                    "expense_category": "food",
                    "is_business_expense": true,
                    "notes": "Team lunch"
                }),
                "Update receipt fields",
            ),
            delete(
                "Delete Receipt",
                by_id("receipts", "receiptId"),
                "Delete receipt",
            ),
            get(
                "Get Receipts by Category",
                Url::new(
                    &["api", "receipts", "by-category"],
                    vec![
                        QueryParam::disabled("start_date", "2024-01-01"),
                        QueryParam::disabled("end_date", "2024-12-31"),
                        QueryParam::disabled("is_business_expense", "true"),
                    ],
                ),
                "Group receipts by expense category with totals",
            ),
            get(
                "Get Monthly Report",
                Url::new(
                    &["api", "receipts", "monthly-report"],
                    vec![
                        QueryParam::described("year", "2024", "Year (required)"),
                        QueryParam::described("month", "1", "Month 1-12 (required)"),
                    ],
                ),
                "Generate comprehensive monthly expense report with category and payment method breakdown",
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// (method, path template, query keys, body keys)
    type Shape<'a> = (&'a str, String, Vec<&'a str>, Vec<String>);

    fn shape(folder: &Folder) -> Vec<Shape<'_>> {
        folder
            .item
            .iter()
            .map(|item| {
                let req = &item.request;
                let query = req.url.query.iter().map(|q| q.key.as_str()).collect();
                let body = req
                    .body
                    .as_ref()
                    .map(|b| {
                        let value: serde_json::Value = serde_json::from_str(&b.raw).unwrap();
                        value.as_object().unwrap().keys().cloned().collect()
                    })
                    .unwrap_or_default();
                (req.method.as_str(), req.url.path_template(), query, body)
            })
            .collect()
    }

    fn strings(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_folder_order_and_counts() {
        let folders = new_folders();
        let names: Vec<&str> = folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Invoices", "Resumes", "Contracts", "Receipts"]);

        let counts: Vec<usize> = folders.iter().map(Folder::endpoint_count).collect();
        assert_eq!(counts, vec![5, 5, 6, 6]);
    }

    #[test]
    fn test_invoice_endpoints() {
        let folder = invoice_folder();
        let expected: Vec<Shape> = vec![
            (
                "GET",
                "/api/invoices".to_string(),
                vec![
                    "page",
                    "limit",
                    "status",
                    "vendor_name",
                    "start_date",
                    "end_date",
                    "sort_by",
                    "sort_order",
                ],
                vec![],
            ),
            ("GET", "/api/invoices/{{invoiceId}}".to_string(), vec![], vec![]),
            (
                "PUT",
                "/api/invoices/{{invoiceId}}".to_string(),
                vec![],
                strings(&["status", "total_amount", "notes"]),
            ),
            ("DELETE", "/api/invoices/{{invoiceId}}".to_string(), vec![], vec![]),
            ("GET", "/api/invoices/stats".to_string(), vec!["start_date", "end_date"], vec![]),
        ];
        assert_eq!(shape(&folder), expected);
    }

    #[test]
    fn test_resume_endpoints() {
        let folder = resume_folder();
        let expected: Vec<Shape> = vec![
            (
                "GET",
                "/api/resumes".to_string(),
                vec![
                    "page",
                    "limit",
                    "candidate_name",
                    "email",
                    "min_experience",
                    "max_experience",
                ],
                vec![],
            ),
            ("GET", "/api/resumes/{{resumeId}}".to_string(), vec![], vec![]),
            (
                "PUT",
                "/api/resumes/{{resumeId}}".to_string(),
                vec![],
                strings(&["candidate_name", "candidate_email", "years_of_experience"]),
            ),
            ("DELETE", "/api/resumes/{{resumeId}}".to_string(), vec![], vec![]),
            (
                "POST",
                "/api/resumes/{{resumeId}}/match-job".to_string(),
                vec![],
                strings(&["job_id"]),
            ),
        ];
        assert_eq!(shape(&folder), expected);
    }

    #[test]
    fn test_contract_endpoints() {
        let folder = contract_folder();
        let expected: Vec<Shape> = vec![
            (
                "GET",
                "/api/contracts".to_string(),
                vec![
                    "page",
                    "limit",
                    "contract_type",
                    "status",
                    "min_risk_score",
                    "max_risk_score",
                ],
                vec![],
            ),
            ("GET", "/api/contracts/{{contractId}}".to_string(), vec![], vec![]),
            (
                "PUT",
                "/api/contracts/{{contractId}}".to_string(),
                vec![],
                strings(&["status", "risk_score"]),
            ),
            ("DELETE", "/api/contracts/{{contractId}}".to_string(), vec![], vec![]),
            ("GET", "/api/contracts/expiring".to_string(), vec!["days"], vec![]),
            ("GET", "/api/contracts/high-risk".to_string(), vec!["min_risk_score"], vec![]),
        ];
        assert_eq!(shape(&folder), expected);
    }

    #[test]
    fn test_receipt_endpoints() {
        let folder = receipt_folder();
        let expected: Vec<Shape> = vec![
            (
                "GET",
                "/api/receipts".to_string(),
                vec![
                    "page",
                    "limit",
                    "expense_category",
                    "merchant_name",
                    "is_business_expense",
                    "start_date",
                    "end_date",
                ],
                vec![],
            ),
            ("GET", "/api/receipts/{{receiptId}}".to_string(), vec![], vec![]),
            (
                "PUT",
                "/api/receipts/{{receiptId}}".to_string(),
                vec![],
                strings(&["expense_category", "is_business_expense", "notes"]),
            ),
            ("DELETE", "/api/receipts/{{receiptId}}".to_string(), vec![], vec![]),
            (
                "GET",
                "/api/receipts/by-category".to_string(),
                vec!["start_date", "end_date", "is_business_expense"],
                vec![],
            ),
            ("GET", "/api/receipts/monthly-report".to_string(), vec!["year", "month"], vec![]),
        ];
        assert_eq!(shape(&folder), expected);
    }

    #[test]
    fn test_required_query_params_are_sent() {
        let folder = receipt_folder();
        let report = &folder.item[5].request.url;
        assert_eq!(report.raw, "{{baseUrl}}/api/receipts/monthly-report?year=2024&month=1");
        assert!(report.query.iter().all(|q| !q.disabled));

        let folder = contract_folder();
        assert_eq!(folder.item[4].request.url.raw, "{{baseUrl}}/api/contracts/expiring?days=30");
        assert_eq!(
            folder.item[5].request.url.raw,
            "{{baseUrl}}/api/contracts/high-risk?min_risk_score=70"
        );
    }

    #[test]
    fn test_body_requests_carry_json_header() {
        for folder in new_folders() {
            for item in &folder.item {
                let req = &item.request;
                assert_eq!(req.body.is_some(), req.method.has_body(), "{}", item.name);
                assert_eq!(req.header.len(), usize::from(req.body.is_some()), "{}", item.name);
                assert!(item.response.is_empty());
            }
        }
    }

    #[test]
    fn test_invoice_body_text() {
        let folder = invoice_folder();
        let body = folder.item[2].request.body.as_ref().unwrap();
        assert_eq!(body.mode, "raw");
        assert_eq!(
            body.raw,
            "{\n  \"status\": \"paid\",\n  \"total_amount\": 1500.0,\n  \"notes\": \"Payment received\"\n}"
        );
    }

    #[test]
    fn test_builders_are_stateless() {
        assert_eq!(new_folders(), new_folders());
        let keys: Vec<String> = new_variables().into_iter().map(|v| v.key).collect();
        assert_eq!(keys, strings(&["invoiceId", "resumeId", "contractId", "receiptId"]));
    }
}
