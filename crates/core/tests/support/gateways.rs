//! In-memory gateway mocks
//!
//! Every mock records the calls it receives and can be told to fail its next
//! write with a scripted error.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use baitulmal_core::{
    AuthGateway, DonorGateway, ProjectGateway, SectorGateway, TransactionGateway, UserGateway,
};
use baitulmal_domain::{
    AuthSession, BaitulMalError, CreateProjectRequest, CreateSectorRequest,
    CreateSectorResponse, CreateTransactionRequest, CreateUserRequest, Donor, EditProjectRequest,
    EditProjectResponse, EditUserRequest, LoginRequest, PaginatedResponse, Project, QueryParams,
    Result as DomainResult, Sector, Transaction, UpdateUserStatusRequest, User,
};

/// Slice `items` the way the backend pages them
pub fn page_of<T: Clone>(items: &[T], params: &QueryParams) -> PaginatedResponse<T> {
    let page_number = params.page_number_or_default();
    let page_size = params.page_size_or_default();
    let start = ((page_number - 1) * page_size) as usize;
    PaginatedResponse {
        items: items.iter().skip(start).take(page_size as usize).cloned().collect(),
        page_number,
        page_size,
        item_count: items.len() as u64,
        ..PaginatedResponse::placeholder()
    }
}

fn unscripted(call: &str) -> BaitulMalError {
    BaitulMalError::Internal(format!("{call} is not scripted"))
}

/// One-shot scripted failure
#[derive(Default, Clone)]
pub struct Failure(Arc<Mutex<Option<BaitulMalError>>>);

impl Failure {
    pub fn arm(&self, err: BaitulMalError) {
        *self.0.lock().unwrap() = Some(err);
    }

    fn take(&self) -> DomainResult<()> {
        match self.0.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

pub fn session(role: baitulmal_domain::UserRole) -> AuthSession {
    AuthSession {
        id: "u-1".into(),
        name: "Amina".into(),
        last_name: "Hodžić".into(),
        phone_number: "+38761111222".into(),
        email: "amina@baitulmal.ba".into(),
        role,
        jwt: "token-1".into(),
    }
}

#[derive(Clone)]
pub struct MockAuthGateway {
    pub session: AuthSession,
    pub logins: Arc<Mutex<Vec<LoginRequest>>>,
    pub me_calls: Arc<Mutex<usize>>,
    pub failure: Failure,
}

impl MockAuthGateway {
    pub fn new(session: AuthSession) -> Self {
        Self {
            session,
            logins: Arc::default(),
            me_calls: Arc::default(),
            failure: Failure::default(),
        }
    }
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn login(&self, request: &LoginRequest) -> DomainResult<AuthSession> {
        self.logins.lock().unwrap().push(request.clone());
        self.failure.take()?;
        Ok(self.session.clone())
    }

    async fn me(&self) -> DomainResult<AuthSession> {
        *self.me_calls.lock().unwrap() += 1;
        self.failure.take()?;
        Ok(AuthSession { jwt: String::new(), ..self.session.clone() })
    }
}

#[derive(Default, Clone)]
pub struct MockUserGateway {
    pub users: Arc<Vec<User>>,
    pub list_calls: Arc<Mutex<Vec<QueryParams>>>,
}

impl MockUserGateway {
    pub fn new(users: Vec<User>) -> Self {
        Self { users: Arc::new(users), list_calls: Arc::default() }
    }

    pub fn requested(&self) -> Vec<QueryParams> {
        self.list_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserGateway for MockUserGateway {
    async fn list(&self, params: &QueryParams) -> DomainResult<PaginatedResponse<User>> {
        self.list_calls.lock().unwrap().push(params.clone());
        let visible: Vec<User> = self
            .users
            .iter()
            .filter(|user| params.include_deleted == Some(true) || !user.entity.is_deleted)
            .cloned()
            .collect();
        Ok(page_of(&visible, params))
    }

    async fn get(&self, user_id: &str) -> DomainResult<User> {
        self.users
            .iter()
            .find(|user| user.id() == user_id)
            .cloned()
            .ok_or_else(|| BaitulMalError::NotFound(user_id.to_string()))
    }

    async fn create(&self, _request: &CreateUserRequest) -> DomainResult<User> {
        Err(unscripted("create user"))
    }

    async fn edit(&self, _user_id: &str, _request: &EditUserRequest) -> DomainResult<User> {
        Err(unscripted("edit user"))
    }

    async fn update_status(
        &self,
        _user_id: &str,
        _request: &UpdateUserStatusRequest,
    ) -> DomainResult<()> {
        Err(unscripted("update user status"))
    }
}

#[derive(Default, Clone)]
pub struct MockProjectGateway {
    pub projects: Arc<Vec<Project>>,
    pub created: Arc<Mutex<Vec<(String, CreateProjectRequest)>>>,
    pub list_calls: Arc<Mutex<usize>>,
    pub failure: Failure,
}

impl MockProjectGateway {
    pub fn created(&self) -> Vec<(String, CreateProjectRequest)> {
        self.created.lock().unwrap().clone()
    }

    pub fn list_count(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }
}

#[async_trait]
impl ProjectGateway for MockProjectGateway {
    async fn list(&self, params: &QueryParams) -> DomainResult<PaginatedResponse<Project>> {
        *self.list_calls.lock().unwrap() += 1;
        Ok(page_of(self.projects.as_slice(), params))
    }

    async fn get(&self, project_id: &str) -> DomainResult<Project> {
        self.projects
            .iter()
            .find(|project| project.id() == project_id)
            .cloned()
            .ok_or_else(|| BaitulMalError::NotFound(project_id.to_string()))
    }

    async fn create(&self, sector_id: &str, request: &CreateProjectRequest) -> DomainResult<()> {
        self.failure.take()?;
        self.created.lock().unwrap().push((sector_id.to_string(), request.clone()));
        Ok(())
    }

    async fn edit(
        &self,
        _sector_id: &str,
        _project_id: &str,
        _request: &EditProjectRequest,
    ) -> DomainResult<EditProjectResponse> {
        Err(unscripted("edit project"))
    }
}

#[derive(Default, Clone)]
pub struct MockSectorGateway {
    pub sectors: Arc<Vec<Sector>>,
    pub list_calls: Arc<Mutex<usize>>,
}

impl MockSectorGateway {
    pub fn list_count(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }
}

#[async_trait]
impl SectorGateway for MockSectorGateway {
    async fn list(&self, params: &QueryParams) -> DomainResult<PaginatedResponse<Sector>> {
        *self.list_calls.lock().unwrap() += 1;
        Ok(page_of(self.sectors.as_slice(), params))
    }

    async fn get(&self, sector_id: &str) -> DomainResult<Sector> {
        self.sectors
            .iter()
            .find(|sector| sector.id() == sector_id)
            .cloned()
            .ok_or_else(|| BaitulMalError::NotFound(sector_id.to_string()))
    }

    async fn create(&self, _request: &CreateSectorRequest) -> DomainResult<CreateSectorResponse> {
        Err(unscripted("create sector"))
    }
}

/// Donor directory searched by email or phone substring
#[derive(Default, Clone)]
pub struct MockDonorGateway {
    pub donors: Arc<Vec<Donor>>,
    pub searches: Arc<Mutex<Vec<QueryParams>>>,
}

impl MockDonorGateway {
    pub fn new(donors: Vec<Donor>) -> Self {
        Self { donors: Arc::new(donors), searches: Arc::default() }
    }

    pub fn searches(&self) -> Vec<QueryParams> {
        self.searches.lock().unwrap().clone()
    }
}

#[async_trait]
impl DonorGateway for MockDonorGateway {
    async fn list(&self, params: &QueryParams) -> DomainResult<PaginatedResponse<Donor>> {
        self.searches.lock().unwrap().push(params.clone());
        let term = params.search_term.clone().unwrap_or_default();
        let matches: Vec<Donor> = self
            .donors
            .iter()
            .filter(|donor| donor.email.contains(&term) || donor.phone_number.contains(&term))
            .cloned()
            .collect();
        Ok(page_of(&matches, params))
    }
}

#[derive(Default, Clone)]
pub struct MockTransactionGateway {
    pub transactions: Arc<Vec<Transaction>>,
    pub created: Arc<Mutex<Vec<CreateTransactionRequest>>>,
    pub failure: Failure,
}

impl MockTransactionGateway {
    pub fn created(&self) -> Vec<CreateTransactionRequest> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransactionGateway for MockTransactionGateway {
    async fn list(&self, params: &QueryParams) -> DomainResult<PaginatedResponse<Transaction>> {
        Ok(page_of(self.transactions.as_slice(), params))
    }

    async fn create(&self, request: &CreateTransactionRequest) -> DomainResult<()> {
        self.created.lock().unwrap().push(request.clone());
        self.failure.take()
    }
}
