//! Services wired to in-memory repositories, with helpers for driving jobs
//! through their lifecycle in tests.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::job::{Job, NewJob};
use crate::domain::entities::member::Member;
use crate::domain::value_objects::Identity;
use crate::repositories::{
    InMemoryJobRepository, InMemoryMemberRepository, InMemoryNotificationRepository,
    InMemoryOfferingRepository, InMemoryRatingRepository,
};

use super::{JobService, MemberService, Notifier, OfferingService, RatingService, TrustService};

pub type Members = InMemoryMemberRepository;
pub type Jobs = InMemoryJobRepository;
pub type Notifications = InMemoryNotificationRepository;

pub struct Marketplace {
    pub job_repository: Arc<Jobs>,
    pub members: MemberService<Members, Notifications>,
    pub jobs: JobService<Jobs, Members, Notifications>,
    pub ratings: RatingService<InMemoryRatingRepository, Jobs, Members, Notifications>,
    pub offerings: OfferingService<InMemoryOfferingRepository, Jobs, Members, Notifications>,
}

impl Marketplace {
    pub fn new() -> Self {
        let member_repository = Arc::new(InMemoryMemberRepository::new());
        let job_repository = Arc::new(InMemoryJobRepository::new());
        let notification_repository = Arc::new(InMemoryNotificationRepository::new());
        let offering_repository = Arc::new(InMemoryOfferingRepository::new());
        let rating_repository = Arc::new(InMemoryRatingRepository::new());

        let notifier = Arc::new(Notifier::new(
            member_repository.clone(),
            notification_repository.clone(),
        ));
        let trust = Arc::new(TrustService::new(job_repository.clone()));

        Self {
            members: MemberService::new(member_repository.clone(), notification_repository.clone()),
            jobs: JobService::new(job_repository.clone(), member_repository.clone(), notifier.clone()),
            ratings: RatingService::new(rating_repository.clone(), job_repository.clone(), notifier.clone()),
            offerings: OfferingService::new(
                offering_repository.clone(),
                member_repository.clone(),
                trust,
                notifier,
            ),
            job_repository,
        }
    }

    /// Registers a member named `name`
    pub async fn member(&self, name: &str) -> Member {
        let id = Uuid::new_v4();
        let identity = Identity::new(id, format!("{}-{}@example.com", name.to_lowercase(), id.simple()), name);
        self.members.ensure_member(&identity).await.unwrap()
    }

    pub async fn post_job(&self, hirer: &Member, payment: i64) -> Job {
        self.jobs
            .create(
                hirer.id,
                NewJob {
                    title: "Paint fence".to_string(),
                    description: "Two coats, white".to_string(),
                    location: "12 Harbour Road".to_string(),
                    payment,
                },
            )
            .await
            .unwrap()
    }

    /// A job between `hirer` and `worker` in IN_PROGRESS
    pub async fn in_progress_job(&self, hirer: &Member, worker: &Member, payment: i64) -> Job {
        let job = self.post_job(hirer, payment).await;
        self.jobs.apply(worker.id, job.id).await.unwrap();
        self.jobs.select_worker(hirer.id, job.id, worker.id).await.unwrap()
    }

    /// A job between `hirer` and `worker` in COMPLETED
    pub async fn completed_job(&self, hirer: &Member, worker: &Member, payment: i64) -> Job {
        let job = self.in_progress_job(hirer, worker, payment).await;
        self.jobs.complete(hirer.id, job.id).await.unwrap()
    }
}
