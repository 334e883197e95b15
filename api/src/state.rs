//! Application state shared by every request handler.

use std::sync::Arc;

use tp_core::repositories::{
    InMemoryJobRepository, InMemoryMemberRepository, InMemoryNotificationRepository,
    InMemoryOfferingRepository, InMemoryRatingRepository, JobRepository, MemberRepository,
    NotificationRepository, OfferingRepository, RatingRepository,
};
use tp_core::services::{JobService, MemberService, Notifier, OfferingService, RatingService, TrustService};
use tp_infra::database::{
    DatabasePool, MySqlJobRepository, MySqlMemberRepository, MySqlNotificationRepository,
    MySqlOfferingRepository, MySqlRatingRepository,
};

/// The set of repository implementations a server runs against
pub trait Repositories: 'static {
    type Jobs: JobRepository + 'static;
    type Members: MemberRepository + 'static;
    type Notifications: NotificationRepository + 'static;
    type Offerings: OfferingRepository + 'static;
    type Ratings: RatingRepository + 'static;
}

/// Process-local storage, used by the development server and the tests
pub struct InMemory;

impl Repositories for InMemory {
    type Jobs = InMemoryJobRepository;
    type Members = InMemoryMemberRepository;
    type Notifications = InMemoryNotificationRepository;
    type Offerings = InMemoryOfferingRepository;
    type Ratings = InMemoryRatingRepository;
}

/// MySQL storage
pub struct MySql;

impl Repositories for MySql {
    type Jobs = MySqlJobRepository;
    type Members = MySqlMemberRepository;
    type Notifications = MySqlNotificationRepository;
    type Offerings = MySqlOfferingRepository;
    type Ratings = MySqlRatingRepository;
}

/// Application state that holds the marketplace services
pub struct AppState<S: Repositories> {
    pub member_service: MemberService<S::Members, S::Notifications>,
    pub job_service: JobService<S::Jobs, S::Members, S::Notifications>,
    pub rating_service: RatingService<S::Ratings, S::Jobs, S::Members, S::Notifications>,
    pub offering_service: OfferingService<S::Offerings, S::Jobs, S::Members, S::Notifications>,
    pub trust_service: Arc<TrustService<S::Jobs>>,
}

impl<S: Repositories> AppState<S> {
    /// Wire the services over one set of repositories
    pub fn new(
        jobs: Arc<S::Jobs>,
        members: Arc<S::Members>,
        notifications: Arc<S::Notifications>,
        offerings: Arc<S::Offerings>,
        ratings: Arc<S::Ratings>,
    ) -> Self {
        let notifier = Arc::new(Notifier::new(members.clone(), notifications.clone()));
        let trust_service = Arc::new(TrustService::new(jobs.clone()));

        Self {
            member_service: MemberService::new(members.clone(), notifications),
            job_service: JobService::new(jobs.clone(), members.clone(), notifier.clone()),
            rating_service: RatingService::new(ratings, jobs, notifier.clone()),
            offering_service: OfferingService::new(offerings, members, trust_service.clone(), notifier),
            trust_service,
        }
    }
}

impl AppState<InMemory> {
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryJobRepository::new()),
            Arc::new(InMemoryMemberRepository::new()),
            Arc::new(InMemoryNotificationRepository::new()),
            Arc::new(InMemoryOfferingRepository::new()),
            Arc::new(InMemoryRatingRepository::new()),
        )
    }
}

impl AppState<MySql> {
    pub fn mysql(database: &DatabasePool) -> Self {
        let pool = database.get_pool().clone();
        Self::new(
            Arc::new(MySqlJobRepository::new(pool.clone())),
            Arc::new(MySqlMemberRepository::new(pool.clone())),
            Arc::new(MySqlNotificationRepository::new(pool.clone())),
            Arc::new(MySqlOfferingRepository::new(pool.clone())),
            Arc::new(MySqlRatingRepository::new(pool)),
        )
    }
}
