//! Typed client for the school-management backend
//!
//! `SchoolClient` knows the route table and the payload types; the
//! [`Transport`] underneath only moves bytes. Decoding also detects soft
//! failures: a success response whose body carries a `message` where a
//! payload was expected.

use crate::endpoints;
use crate::error::{server_message, Failure, FALLBACK_MESSAGE};
use crate::request::{ApiRequest, FilePart, MultipartForm};
use crate::transport::Transport;
use crate::types::{
    Ack, AttendanceRecord, BulkPayment, Document, DocumentUpload, Employee, Fee, FeeStatusUpdate,
    NewFee, Parent, ParentRegistration, SalaryRecord, Student, StudentRegistration, Teacher,
    TeacherRegistration,
};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Default timeout for the bulk salary payment call
pub const DEFAULT_BULK_PAYMENT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for every backend endpoint the dashboards use
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct SchoolClient {
    transport: Arc<dyn Transport>,
    bulk_payment_timeout: Duration,
}

impl SchoolClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            bulk_payment_timeout: DEFAULT_BULK_PAYMENT_TIMEOUT,
        }
    }

    /// Override the bulk payment timeout
    pub fn with_bulk_payment_timeout(mut self, timeout: Duration) -> Self {
        self.bulk_payment_timeout = timeout;
        self
    }

    pub fn bulk_payment_timeout(&self) -> Duration {
        self.bulk_payment_timeout
    }

    async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, Failure> {
        debug!("Fetching {}", request);
        let body = self.transport.execute(request).await?;
        decode_payload(body)
    }

    async fn mutate(&self, request: ApiRequest) -> Result<Ack, Failure> {
        debug!("Sending {}", request);
        let body = self.transport.execute(request).await?;
        decode_ack(body)
    }

    // === Fees ===

    pub async fn fetch_all_fees(&self, school_id: &str) -> Result<Vec<Fee>, Failure> {
        self.fetch(ApiRequest::get(endpoints::all_fees(school_id)))
            .await
    }

    pub async fn fetch_student_fee(&self, student_id: &str) -> Result<Fee, Failure> {
        self.fetch(ApiRequest::get(endpoints::student_fee(student_id)))
            .await
    }

    pub async fn create_fee(&self, fee: &NewFee) -> Result<Ack, Failure> {
        self.mutate(ApiRequest::post(endpoints::FEE_CREATE, json_body(fee)?))
            .await
    }

    pub async fn update_fee_status(
        &self,
        fee_id: &str,
        update: &FeeStatusUpdate,
    ) -> Result<Ack, Failure> {
        self.mutate(ApiRequest::put(endpoints::fee(fee_id), json_body(update)?))
            .await
    }

    /// Delete a student's fee record, or one detail of it
    pub async fn delete_fee(
        &self,
        student_id: &str,
        fee_detail_id: Option<&str>,
    ) -> Result<Ack, Failure> {
        self.mutate(ApiRequest::delete(endpoints::fee_delete(
            student_id,
            fee_detail_id,
        )))
        .await
    }

    // === Parents ===

    pub async fn fetch_parents(&self, school_id: &str) -> Result<Vec<Parent>, Failure> {
        self.fetch(ApiRequest::get(endpoints::parents(school_id)))
            .await
    }

    pub async fn fetch_parent(&self, parent_id: &str) -> Result<Parent, Failure> {
        self.fetch(ApiRequest::get(endpoints::parent(parent_id)))
            .await
    }

    pub async fn register_parent(&self, parent: &ParentRegistration) -> Result<Ack, Failure> {
        self.mutate(ApiRequest::post(
            endpoints::PARENT_REGISTER,
            json_body(parent)?,
        ))
        .await
    }

    pub async fn update_parent(
        &self,
        parent_id: &str,
        parent: &ParentRegistration,
    ) -> Result<Ack, Failure> {
        self.mutate(ApiRequest::put(
            endpoints::parent(parent_id),
            json_body(parent)?,
        ))
        .await
    }

    pub async fn delete_parent(&self, parent_id: &str) -> Result<Ack, Failure> {
        self.mutate(ApiRequest::delete(endpoints::parent(parent_id)))
            .await
    }

    pub async fn link_student(&self, parent_id: &str, student_id: &str) -> Result<Ack, Failure> {
        self.mutate(ApiRequest::put(
            endpoints::parent_link(parent_id, student_id),
            Value::Null,
        ))
        .await
    }

    pub async fn unlink_student(&self, parent_id: &str, student_id: &str) -> Result<Ack, Failure> {
        self.mutate(ApiRequest::put(
            endpoints::parent_unlink(parent_id, student_id),
            Value::Null,
        ))
        .await
    }

    // === Salaries ===

    pub async fn fetch_salary_employees(
        &self,
        school_id: &str,
        employee_type: &str,
    ) -> Result<Vec<Employee>, Failure> {
        self.fetch(ApiRequest::get(endpoints::salary_employees(
            school_id,
            employee_type,
        )))
        .await
    }

    /// Create a salary record, or update the existing one for that month
    pub async fn save_salary(&self, record: &SalaryRecord) -> Result<Ack, Failure> {
        self.mutate(ApiRequest::post(endpoints::SALARY_CREATE, json_body(record)?))
            .await
    }

    /// Pay several employees at once
    ///
    /// This is the one call with an explicit timeout; exceeding it yields
    /// [`Failure::Timeout`].
    pub async fn bulk_salary_payment(&self, payment: &BulkPayment) -> Result<Ack, Failure> {
        self.mutate(
            ApiRequest::post(endpoints::SALARY_BULK_PAYMENT, json_body(payment)?)
                .with_timeout(self.bulk_payment_timeout),
        )
        .await
    }

    // === Documents ===

    pub async fn upload_document(&self, upload: &DocumentUpload) -> Result<Ack, Failure> {
        let form = MultipartForm::new()
            .text("ownerId", upload.owner_id.clone())
            .text("title", upload.title.clone())
            .file(FilePart {
                field: "file".to_string(),
                file_name: upload.file_name.clone(),
                mime: upload.mime.clone(),
                bytes: upload.bytes.clone(),
            });
        self.mutate(ApiRequest::post_multipart(endpoints::DOCUMENT_CREATE, form))
            .await
    }

    pub async fn fetch_teacher_documents(&self, teacher_id: &str) -> Result<Vec<Document>, Failure> {
        self.fetch(ApiRequest::get(endpoints::teacher_documents(teacher_id)))
            .await
    }

    pub async fn delete_document(&self, document_id: &str) -> Result<Ack, Failure> {
        self.mutate(ApiRequest::delete(endpoints::document(document_id)))
            .await
    }

    // === Students ===

    pub async fn fetch_students(&self, school_id: &str) -> Result<Vec<Student>, Failure> {
        self.fetch(ApiRequest::get(endpoints::students(school_id)))
            .await
    }

    pub async fn fetch_student(&self, student_id: &str) -> Result<Student, Failure> {
        self.fetch(ApiRequest::get(endpoints::student(student_id)))
            .await
    }

    pub async fn register_student(&self, student: &StudentRegistration) -> Result<Ack, Failure> {
        self.mutate(ApiRequest::post(
            endpoints::STUDENT_REGISTER,
            json_body(student)?,
        ))
        .await
    }

    pub async fn update_student(
        &self,
        student_id: &str,
        student: &StudentRegistration,
    ) -> Result<Ack, Failure> {
        self.mutate(ApiRequest::put(
            endpoints::student(student_id),
            json_body(student)?,
        ))
        .await
    }

    pub async fn delete_student(&self, student_id: &str) -> Result<Ack, Failure> {
        self.mutate(ApiRequest::delete(endpoints::student(student_id)))
            .await
    }

    // === Teachers ===

    pub async fn fetch_teachers(&self, school_id: &str) -> Result<Vec<Teacher>, Failure> {
        self.fetch(ApiRequest::get(endpoints::teachers(school_id)))
            .await
    }

    pub async fn fetch_teacher(&self, teacher_id: &str) -> Result<Teacher, Failure> {
        self.fetch(ApiRequest::get(endpoints::teacher(teacher_id)))
            .await
    }

    pub async fn register_teacher(&self, teacher: &TeacherRegistration) -> Result<Ack, Failure> {
        self.mutate(ApiRequest::post(
            endpoints::TEACHER_REGISTER,
            json_body(teacher)?,
        ))
        .await
    }

    pub async fn update_teacher(
        &self,
        teacher_id: &str,
        teacher: &TeacherRegistration,
    ) -> Result<Ack, Failure> {
        self.mutate(ApiRequest::put(
            endpoints::teacher(teacher_id),
            json_body(teacher)?,
        ))
        .await
    }

    pub async fn delete_teacher(&self, teacher_id: &str) -> Result<Ack, Failure> {
        self.mutate(ApiRequest::delete(endpoints::teacher(teacher_id)))
            .await
    }

    // === Attendance ===

    pub async fn fetch_attendance(&self, student_id: &str) -> Result<Vec<AttendanceRecord>, Failure> {
        self.fetch(ApiRequest::get(endpoints::attendance(student_id)))
            .await
    }
}

fn json_body<B: Serialize>(body: &B) -> Result<Value, Failure> {
    serde_json::to_value(body)
        .map_err(|e| Failure::Transport(format!("Failed to encode request body: {}", e)))
}

/// Decode a payload, turning a `{ message }` body into a soft failure
///
/// A body that decodes into `T` is a success even if it also carries a
/// `message`; the message is only logged.
pub fn decode_payload<T: DeserializeOwned>(body: Value) -> Result<T, Failure> {
    let message = server_message(&body).map(str::to_string);
    match serde_json::from_value::<T>(body) {
        Ok(payload) => {
            if let Some(message) = message {
                warn!("Payload decoded alongside server message: {}", message);
            }
            Ok(payload)
        }
        Err(e) => match message {
            Some(message) => Err(Failure::Soft(message)),
            None => Err(Failure::Transport(format!("Unexpected response: {}", e))),
        },
    }
}

/// Decode an acknowledgement
///
/// Mutation endpoints answer with a `message` on success, so a message alone
/// is not a failure here. A non-empty `error` field or `"success": false` is.
pub fn decode_ack(body: Value) -> Result<Ack, Failure> {
    if let Some(error) = body
        .get("error")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|e| !e.is_empty())
    {
        return Err(Failure::Soft(error.to_string()));
    }

    let message = server_message(&body).map(str::to_string);
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(Failure::Soft(
            message.unwrap_or_else(|| FALLBACK_MESSAGE.to_string()),
        ));
    }

    Ok(Ack { message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{Method, RequestBody};
    use crate::types::{Guardian, PaymentStatus, StudentRef};
    use async_trait::async_trait;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Mutex;

    /// Mock transport returning one canned result and recording requests
    struct MockTransport {
        result: Result<Value, Failure>,
        requests: Mutex<Vec<ApiRequest>>,
    }

    impl MockTransport {
        fn new(result: Result<Value, Failure>) -> Arc<Self> {
            Arc::new(Self {
                result,
                requests: Mutex::new(Vec::new()),
            })
        }

        fn last_request(&self) -> ApiRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn execute(&self, request: ApiRequest) -> Result<Value, Failure> {
            self.requests.lock().unwrap().push(request);
            self.result.clone()
        }
    }

    fn client(transport: &Arc<MockTransport>) -> SchoolClient {
        SchoolClient::new(transport.clone())
    }

    #[tokio::test]
    async fn test_fetch_all_fees() {
        let transport = MockTransport::new(Ok(json!([
            { "_id": "f1", "studentId": "s1", "feeDetails": [] }
        ])));
        let fees = client(&transport).fetch_all_fees("sch-1").await.unwrap();

        assert_eq!(fees.len(), 1);
        assert_eq!(fees[0].student_id, "s1");
        let request = transport.last_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/AllFees/sch-1");
    }

    #[tokio::test]
    async fn test_message_instead_of_list_is_soft_failure() {
        let transport = MockTransport::new(Ok(json!({ "message": "No fees found" })));
        let result = client(&transport).fetch_all_fees("sch-1").await;
        assert_eq!(result, Err(Failure::Soft("No fees found".into())));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_transport_failure() {
        let transport = MockTransport::new(Ok(json!({ "unexpected": true })));
        let result = client(&transport).fetch_student_fee("s1").await;
        assert!(matches!(result, Err(Failure::Transport(_))));
    }

    #[tokio::test]
    async fn test_transport_failure_passes_through() {
        let transport = MockTransport::new(Err(Failure::Transport("Network Error".into())));
        let result = client(&transport).fetch_parents("sch-1").await;
        assert_eq!(result, Err(Failure::Transport("Network Error".into())));
    }

    #[tokio::test]
    async fn test_bulk_payment_sets_timeout() {
        let transport = MockTransport::new(Ok(json!({ "message": "Salaries paid" })));
        let payment = BulkPayment {
            school_id: "sch-1".into(),
            month: "May".into(),
            employee_ids: vec!["e1".into(), "e2".into()],
            payment_date: Utc::now(),
        };
        let ack = client(&transport)
            .with_bulk_payment_timeout(Duration::from_secs(12))
            .bulk_salary_payment(&payment)
            .await
            .unwrap();

        assert_eq!(ack.message.as_deref(), Some("Salaries paid"));
        let request = transport.last_request();
        assert_eq!(request.path, "/Salary/BulkPayment");
        assert_eq!(request.timeout, Some(Duration::from_secs(12)));
        assert_eq!(request.json().unwrap()["employeeIds"], json!(["e1", "e2"]));
    }

    #[tokio::test]
    async fn test_other_calls_have_no_timeout() {
        let transport = MockTransport::new(Ok(json!({})));
        let record = SalaryRecord {
            employee_id: "e1".into(),
            month: "May".into(),
            amount: 50_000.0,
            paid_amount: 0.0,
            status: PaymentStatus::Unpaid,
            payment_date: None,
        };
        client(&transport).save_salary(&record).await.unwrap();
        assert!(transport.last_request().timeout.is_none());
    }

    #[tokio::test]
    async fn test_document_upload_is_multipart() {
        let transport = MockTransport::new(Ok(json!({ "message": "Uploaded" })));
        let upload = DocumentUpload {
            owner_id: "t1".into(),
            title: "Degree".into(),
            file_name: "degree.pdf".into(),
            mime: Some("application/pdf".into()),
            bytes: vec![1, 2, 3],
        };
        client(&transport).upload_document(&upload).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.path, "/DocumentCreate");
        let RequestBody::Multipart(form) = request.body else {
            panic!("expected multipart body");
        };
        assert_eq!(form.field("ownerId"), Some("t1"));
        assert_eq!(form.file.unwrap().file_name, "degree.pdf");
    }

    #[tokio::test]
    async fn test_link_student_path() {
        let transport = MockTransport::new(Ok(Value::Null));
        client(&transport).link_student("p1", "s1").await.unwrap();
        let request = transport.last_request();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.path, "/Parent/Link/p1/s1");
    }

    #[test]
    fn test_decode_ack_variants() {
        assert_eq!(decode_ack(Value::Null), Ok(Ack::default()));
        assert_eq!(
            decode_ack(json!({ "message": "Fee deleted" })),
            Ok(Ack {
                message: Some("Fee deleted".into())
            })
        );
        assert_eq!(
            decode_ack(json!({ "error": "Roll number taken" })),
            Err(Failure::Soft("Roll number taken".into()))
        );
        assert_eq!(
            decode_ack(json!({ "success": false, "message": "Employee not found" })),
            Err(Failure::Soft("Employee not found".into()))
        );
        assert_eq!(
            decode_ack(json!({ "success": false })),
            Err(Failure::Soft(FALLBACK_MESSAGE.into()))
        );
    }

    #[test]
    fn test_payload_with_message_still_succeeds() {
        let body = json!({ "_id": "s1", "name": "Omar", "message": "ok" });
        let student: StudentRef = decode_payload(body).unwrap();
        assert_eq!(student.name, "Omar");
    }

    fn requests(transport: &MockTransport) -> Vec<ApiRequest> {
        transport.requests.lock().unwrap().clone()
    }

    #[tokio::test]
    async fn test_every_operation_hits_its_route() {
        let transport = MockTransport::new(Ok(json!({ "message": "ok" })));
        let c = client(&transport).with_bulk_payment_timeout(Duration::from_secs(12));

        let new_fee = NewFee {
            student_id: "s1".into(),
            school_id: "sch-1".into(),
            fee_details: vec![],
        };
        let status_update = FeeStatusUpdate {
            fee_detail_id: "d1".into(),
            status: PaymentStatus::Partial,
            paid_amount: Some(300.0),
            payment_date: None,
        };
        let parent = ParentRegistration {
            school_id: "sch-1".into(),
            email: "family@mail.com".into(),
            password: "Passw0rd!".into(),
            father: Guardian {
                name: "Tariq".into(),
                ..Guardian::default()
            },
            mother: Guardian {
                name: "Sana".into(),
                ..Guardian::default()
            },
            guardian: None,
            student_ids: vec!["s1".into()],
        };
        let salary = SalaryRecord {
            employee_id: "e1".into(),
            month: "May".into(),
            amount: 50_000.0,
            paid_amount: 0.0,
            status: PaymentStatus::Unpaid,
            payment_date: None,
        };
        let student = StudentRegistration {
            school_id: "sch-1".into(),
            name: "Ayesha".into(),
            roll_number: "12".into(),
            email: "ayesha@school.edu".into(),
            password: "Passw0rd!".into(),
            class_name: None,
            section: None,
        };
        let teacher = TeacherRegistration {
            school_id: "sch-1".into(),
            name: "Imran".into(),
            email: "imran@school.edu".into(),
            password: "Passw0rd!".into(),
            subjects: vec!["Math".into()],
            phone: None,
        };
        let payment_date = Utc::now();
        let bulk = BulkPayment {
            school_id: "sch-1".into(),
            month: "May".into(),
            employee_ids: vec!["e1".into(), "e2".into()],
            payment_date,
        };
        let upload = DocumentUpload {
            owner_id: "t1".into(),
            title: "Degree".into(),
            file_name: "degree.pdf".into(),
            mime: None,
            bytes: vec![7],
        };

        let fee_json = json!({ "studentId": "s1", "schoolId": "sch-1", "feeDetails": [] });
        let status_json = json!({ "feeDetailId": "d1", "status": "Partial", "paidAmount": 300.0 });
        let parent_json = json!({
            "schoolId": "sch-1",
            "email": "family@mail.com",
            "password": "Passw0rd!",
            "father": { "name": "Tariq" },
            "mother": { "name": "Sana" },
            "studentIds": ["s1"]
        });
        let salary_json = json!({
            "employeeId": "e1",
            "month": "May",
            "amount": 50000.0,
            "paidAmount": 0.0,
            "status": "Unpaid"
        });
        let student_json = json!({
            "schoolId": "sch-1",
            "name": "Ayesha",
            "rollNumber": "12",
            "email": "ayesha@school.edu",
            "password": "Passw0rd!"
        });
        let teacher_json = json!({
            "schoolId": "sch-1",
            "name": "Imran",
            "email": "imran@school.edu",
            "password": "Passw0rd!",
            "subjects": ["Math"]
        });

        let _ = c.fetch_all_fees("sch-1").await;
        let _ = c.fetch_student_fee("s1").await;
        let _ = c.create_fee(&new_fee).await;
        let _ = c.update_fee_status("f1", &status_update).await;
        let _ = c.delete_fee("s1", None).await;
        let _ = c.delete_fee("s1", Some("d1")).await;
        let _ = c.fetch_parents("sch-1").await;
        let _ = c.fetch_parent("p1").await;
        let _ = c.register_parent(&parent).await;
        let _ = c.update_parent("p1", &parent).await;
        let _ = c.delete_parent("p1").await;
        let _ = c.link_student("p1", "s1").await;
        let _ = c.unlink_student("p1", "s1").await;
        let _ = c.fetch_salary_employees("sch-1", "teacher").await;
        let _ = c.save_salary(&salary).await;
        let _ = c.bulk_salary_payment(&bulk).await;
        let _ = c.upload_document(&upload).await;
        let _ = c.fetch_teacher_documents("t1").await;
        let _ = c.delete_document("doc1").await;
        let _ = c.fetch_students("sch-1").await;
        let _ = c.fetch_student("s1").await;
        let _ = c.register_student(&student).await;
        let _ = c.update_student("s1", &student).await;
        let _ = c.delete_student("s1").await;
        let _ = c.fetch_teachers("sch-1").await;
        let _ = c.fetch_teacher("t1").await;
        let _ = c.register_teacher(&teacher).await;
        let _ = c.update_teacher("t1", &teacher).await;
        let _ = c.delete_teacher("t1").await;
        let _ = c.fetch_attendance("s1").await;

        let expected = vec![
            ApiRequest::get("/AllFees/sch-1"),
            ApiRequest::get("/Fees/s1"),
            ApiRequest::post("/FeeCreate", fee_json),
            ApiRequest::put("/Fee/f1", status_json),
            ApiRequest::delete("/Fee/s1"),
            ApiRequest::delete("/Fee/s1/d1"),
            ApiRequest::get("/Parents/sch-1"),
            ApiRequest::get("/Parent/p1"),
            ApiRequest::post("/ParentReg", parent_json.clone()),
            ApiRequest::put("/Parent/p1", parent_json),
            ApiRequest::delete("/Parent/p1"),
            ApiRequest::put("/Parent/Link/p1/s1", Value::Null),
            ApiRequest::put("/Parent/Unlink/p1/s1", Value::Null),
            ApiRequest::get("/Salary/Employees/sch-1/teacher"),
            ApiRequest::post("/Salary/Create", salary_json),
            ApiRequest::post(
                "/Salary/BulkPayment",
                json!({
                    "schoolId": "sch-1",
                    "month": "May",
                    "employeeIds": ["e1", "e2"],
                    "paymentDate": payment_date
                }),
            )
            .with_timeout(Duration::from_secs(12)),
            ApiRequest::post_multipart(
                "/DocumentCreate",
                MultipartForm::new()
                    .text("ownerId", "t1")
                    .text("title", "Degree")
                    .file(FilePart {
                        field: "file".into(),
                        file_name: "degree.pdf".into(),
                        mime: None,
                        bytes: vec![7],
                    }),
            ),
            ApiRequest::get("/TeacherDocuments/t1"),
            ApiRequest::delete("/Documents/doc1"),
            ApiRequest::get("/Students/sch-1"),
            ApiRequest::get("/Student/s1"),
            ApiRequest::post("/StudentReg", student_json.clone()),
            ApiRequest::put("/Student/s1", student_json),
            ApiRequest::delete("/Student/s1"),
            ApiRequest::get("/Teachers/sch-1"),
            ApiRequest::get("/Teacher/t1"),
            ApiRequest::post("/TeacherReg", teacher_json.clone()),
            ApiRequest::put("/Teacher/t1", teacher_json),
            ApiRequest::delete("/Teacher/t1"),
            ApiRequest::get("/Attendance/s1"),
        ];
        assert_eq!(requests(&transport), expected);
    }

    #[tokio::test]
    async fn test_acknowledging_operations_return_the_message() {
        let transport = MockTransport::new(Ok(json!({ "message": "Teacher deleted" })));
        let ack = client(&transport).delete_teacher("t1").await.unwrap();
        assert_eq!(ack.message.as_deref(), Some("Teacher deleted"));

        let transport = MockTransport::new(Ok(json!({ "error": "Parent not found" })));
        let result = client(&transport).unlink_student("p1", "s1").await;
        assert_eq!(result, Err(Failure::Soft("Parent not found".into())));
    }

    #[tokio::test]
    async fn test_payload_operations_decode() {
        let transport = MockTransport::new(Ok(json!([
            { "subjectId": "math", "status": "Present" },
            { "subjectId": "math", "status": "Absent" }
        ])));
        let records = client(&transport).fetch_attendance("s1").await.unwrap();
        assert_eq!(records.len(), 2);

        let transport = MockTransport::new(Ok(json!({
            "_id": "t1", "name": "Imran", "email": "imran@school.edu", "subjects": ["Math"]
        })));
        let teacher = client(&transport).fetch_teacher("t1").await.unwrap();
        assert_eq!(teacher.subjects, vec!["Math".to_string()]);

        let transport = MockTransport::new(Ok(json!([
            { "_id": "d1", "ownerId": "t1", "title": "Degree", "fileName": "degree.pdf" }
        ])));
        let documents = client(&transport).fetch_teacher_documents("t1").await.unwrap();
        assert_eq!(documents[0].title, "Degree");
    }
}
