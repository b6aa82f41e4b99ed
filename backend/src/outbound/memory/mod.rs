//! In-memory persistence adapter.
//!
//! Backs every repository port with a mutex-guarded table per entity type.
//! Each table owns its rows and its id counter; ids start at 1 and increase
//! strictly, and a consumed id is never reused. Uniqueness-guarded inserts
//! scan and insert under a single lock acquisition, so concurrent duplicate
//! submissions cannot both succeed.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::credential::PasswordDigest;
use crate::domain::ports::{
    ContactRepository, LoginService, NewsletterRepository, SignupRepository, UserRepository,
};
use crate::domain::{
    Contact, Error, LoginCredentials, NewContact, NewSignup, NewSubscription, NewUser,
    NewsletterSubscription, Signup, User,
};

/// Login failure message shared by the unknown-username and wrong-password
/// paths so callers cannot distinguish them.
const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Well-formed digest that no password hashes to in practice. Verified
/// against when the username is unknown so both login failure paths pay the
/// same hashing cost.
const UNKNOWN_USER_DIGEST: &str = "v1$00000000000000000000000000000000\
$0000000000000000000000000000000000000000000000000000000000000000";

/// One entity collection: rows keyed by id plus the id counter.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Consume the next id and insert the record built from it.
    fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T
    where
        T: Clone,
    {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Process-wide entity store.
///
/// Constructed once at startup and shared across workers behind `Arc`; it
/// implements every store port plus [`LoginService`].
#[derive(Debug)]
pub struct MemoryStore {
    contacts: Mutex<Table<Contact>>,
    newsletters: Mutex<Table<NewsletterSubscription>>,
    signups: Mutex<Table<Signup>>,
    users: Mutex<Table<User>>,
}

impl MemoryStore {
    /// Create an empty store with all counters at 1.
    pub fn new() -> Self {
        Self {
            contacts: Mutex::new(Table::new()),
            newsletters: Mutex::new(Table::new()),
            signups: Mutex::new(Table::new()),
            users: Mutex::new(Table::new()),
        }
    }

    /// Number of stored newsletter subscriptions.
    pub fn newsletter_count(&self) -> usize {
        self.newsletters.lock().map_or(0, |table| table.len())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Acquire a table lock, surfacing poisoning as an internal error instead
/// of panicking in a request path.
fn lock<T>(table: &Mutex<Table<T>>) -> Result<MutexGuard<'_, Table<T>>, Error> {
    table
        .lock()
        .map_err(|_| Error::internal("entity store lock poisoned"))
}

#[async_trait]
impl ContactRepository for MemoryStore {
    async fn create(&self, input: NewContact) -> Result<Contact, Error> {
        let mut contacts = lock(&self.contacts)?;
        Ok(contacts.insert_with(|id| Contact::create(id, input)))
    }
}

#[async_trait]
impl NewsletterRepository for MemoryStore {
    async fn subscribe(&self, input: NewSubscription) -> Result<NewsletterSubscription, Error> {
        let mut newsletters = lock(&self.newsletters)?;
        if newsletters
            .values()
            .any(|subscription| subscription.email == input.email())
        {
            return Err(Error::conflict("Email already subscribed"));
        }
        Ok(newsletters.insert_with(|id| NewsletterSubscription::create(id, input)))
    }
}

#[async_trait]
impl SignupRepository for MemoryStore {
    async fn create(&self, input: NewSignup) -> Result<Signup, Error> {
        let mut signups = lock(&self.signups)?;
        Ok(signups.insert_with(|id| Signup::create(id, input, Utc::now())))
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, input: NewUser) -> Result<User, Error> {
        let mut users = lock(&self.users)?;
        let username = input.username().to_lowercase();
        if users
            .values()
            .any(|user| user.username().to_lowercase() == username)
        {
            return Err(Error::conflict("Username already exists"));
        }
        let email = input.email().to_lowercase();
        if users
            .values()
            .any(|user| user.email().to_lowercase() == email)
        {
            return Err(Error::conflict("Email already exists"));
        }
        Ok(users.insert_with(|id| User::create(id, input, Utc::now())))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, Error> {
        let users = lock(&self.users)?;
        Ok(users.rows.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, Error> {
        let users = lock(&self.users)?;
        let needle = username.to_lowercase();
        Ok(users
            .values()
            .find(|user| user.username().to_lowercase() == needle)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        let users = lock(&self.users)?;
        let needle = email.to_lowercase();
        Ok(users
            .values()
            .find(|user| user.email().to_lowercase() == needle)
            .cloned())
    }
}

#[async_trait]
impl LoginService for MemoryStore {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let user = self.find_by_username(credentials.username()).await?;
        match user {
            Some(user) if PasswordDigest::verify(user.credential(), credentials.password()) => {
                Ok(user)
            }
            Some(_) => Err(Error::unauthorized(INVALID_CREDENTIALS)),
            None => {
                // Unknown usernames still pay the digest cost.
                let _ = PasswordDigest::verify(UNKNOWN_USER_DIGEST, credentials.password());
                Err(Error::unauthorized(INVALID_CREDENTIALS))
            }
        }
    }
}
