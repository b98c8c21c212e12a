//! SampleCatalog - bundled demo data for offline use.
//!
//! Implements the same service traits as the HTTP client, backed by a small
//! bilingual in-memory data set, so every view has content when no backend
//! is reachable. Sessions created offline are kept for the lifetime of the
//! process but never persisted.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use tokio::sync::RwLock;
use uuid::Uuid;

use huddle_core::error::ServiceResult;
use huddle_core::knowledge::{KnowledgeAnswer, KnowledgeApi, KnowledgeQuery};
use huddle_core::meeting::{
    CreateSessionPayload, CreatedSession, Meeting, MeetingType, SchedulingApi,
};
use huddle_core::project::{Project, ProjectApi, ProjectDetail, ProjectStatus};

const AURORA: &str = "p-aurora";
const MINARET: &str = "p-minaret";
const LEDGER: &str = "p-ledger";

static SAMPLE_PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        Project {
            id: AURORA.to_string(),
            name: "Aurora onboarding portal".to_string(),
            description: Some("Client onboarding workflows and KYC checks".to_string()),
            status: ProjectStatus::Active,
            member_count: 6,
        },
        Project {
            id: MINARET.to_string(),
            name: "قاعدة معارف منارة".to_string(),
            description: Some("تنظيم مستندات الشركة ومحاضر الاجتماعات".to_string()),
            status: ProjectStatus::Active,
            member_count: 4,
        },
        Project {
            id: LEDGER.to_string(),
            name: "Ledger archive migration".to_string(),
            description: Some("Moving the records archive to the new storage".to_string()),
            status: ProjectStatus::OnHold,
            member_count: 3,
        },
    ]
});

struct CannedAnswer {
    keywords: &'static [&'static str],
    en: &'static str,
    ar: &'static str,
}

static CANNED_ANSWERS: &[CannedAnswer] = &[
    CannedAnswer {
        keywords: &["kyc", "اعرف عميلك"],
        en: "KYC checks belong to the Aurora onboarding project. The current policy \
             requires identity verification within 24 hours of sign-up; the checklist \
             lives in the onboarding handbook.",
        ar: "إجراءات اعرف عميلك تتبع مشروع بوابة أورورا. تتطلب السياسة الحالية التحقق \
             من الهوية خلال 24 ساعة من التسجيل، وتجد قائمة التحقق في دليل التهيئة.",
    },
    CannedAnswer {
        keywords: &["onboarding", "تهيئة"],
        en: "Onboarding is documented in the Aurora handbook: account setup, KYC \
             verification, then the welcome session with the project team.",
        ar: "عملية التهيئة موثقة في دليل أورورا: إنشاء الحساب، ثم التحقق عبر اعرف \
             عميلك، ثم جلسة الترحيب مع فريق المشروع.",
    },
    CannedAnswer {
        keywords: &["archive", "migration", "أرشيف"],
        en: "The last project meeting put the archive migration on hold until next \
             quarter so the team can finish the onboarding portal first.",
        ar: "قرر اجتماع المشروع الأخير تعليق نقل الأرشيف حتى الربع القادم ليتفرغ \
             الفريق لإكمال بوابة التهيئة أولًا.",
    },
];

const DEFAULT_ANSWER_EN: &str = "I could not find anything about that in the demo data. \
     Try asking about KYC, onboarding, or the archive migration.";
const DEFAULT_ANSWER_AR: &str = "لم أجد شيئًا عن ذلك في البيانات التجريبية. جرّب السؤال عن \
     اعرف عميلك أو التهيئة أو نقل الأرشيف.";

/// In-memory implementation of the backend service traits.
pub struct SampleCatalog {
    meetings: RwLock<Vec<Meeting>>,
}

impl SampleCatalog {
    pub fn new() -> Self {
        Self {
            meetings: RwLock::new(seed_meetings(Utc::now())),
        }
    }
}

impl Default for SampleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_meetings(now: DateTime<Utc>) -> Vec<Meeting> {
    vec![
        Meeting {
            id: "m-sprint".to_string(),
            title: "Sprint planning".to_string(),
            description: Some("Scope the next onboarding portal sprint".to_string()),
            meeting_type: MeetingType::ProjectMeeting,
            project_id: Some(AURORA.to_string()),
            start_time: now + Duration::days(1),
            end_time: now + Duration::days(1) + Duration::hours(1),
        },
        Meeting {
            id: "m-kyc".to_string(),
            title: "KYC policy walkthrough".to_string(),
            description: Some("Review the verification checklist with compliance".to_string()),
            meeting_type: MeetingType::ProjectMeeting,
            project_id: Some(AURORA.to_string()),
            start_time: now - Duration::days(3),
            end_time: now - Duration::days(3) + Duration::hours(1),
        },
        Meeting {
            id: "m-study".to_string(),
            title: "حلقة دراسة: متطلبات اعرف عميلك".to_string(),
            description: Some("مراجعة جماعية للفصل الثالث من الدليل".to_string()),
            meeting_type: MeetingType::StudySession,
            project_id: Some(MINARET.to_string()),
            start_time: now + Duration::days(2),
            end_time: now + Duration::days(2) + Duration::minutes(90),
        },
        Meeting {
            id: "m-reading".to_string(),
            title: "Rust reading group".to_string(),
            description: None,
            meeting_type: MeetingType::StudySession,
            project_id: None,
            start_time: now + Duration::days(5),
            end_time: now + Duration::days(5) + Duration::hours(1),
        },
    ]
}

fn is_arabic(text: &str) -> bool {
    text.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c))
}

#[async_trait]
impl SchedulingApi for SampleCatalog {
    async fn create_session(
        &self,
        payload: &CreateSessionPayload,
    ) -> ServiceResult<CreatedSession> {
        let id = Uuid::new_v4().to_string();
        let meeting = Meeting {
            id: id.clone(),
            title: payload.title.clone(),
            description: payload.description.clone(),
            meeting_type: payload.meeting_type,
            project_id: payload.project_id.clone(),
            start_time: payload.start_time,
            end_time: payload.end_time,
        };
        self.meetings.write().await.push(meeting);
        Ok(CreatedSession { id })
    }

    async fn list_meetings(&self) -> ServiceResult<Vec<Meeting>> {
        Ok(self.meetings.read().await.clone())
    }
}

#[async_trait]
impl ProjectApi for SampleCatalog {
    async fn list_projects(&self) -> ServiceResult<Vec<Project>> {
        Ok(SAMPLE_PROJECTS.clone())
    }

    async fn project_detail(&self, id: &str) -> ServiceResult<Option<ProjectDetail>> {
        let Some(project) = SAMPLE_PROJECTS.iter().find(|p| p.id == id).cloned() else {
            return Ok(None);
        };
        let meetings = self
            .meetings
            .read()
            .await
            .iter()
            .filter(|m| m.project_id.as_deref() == Some(id))
            .cloned()
            .collect();
        Ok(Some(ProjectDetail { project, meetings }))
    }
}

#[async_trait]
impl KnowledgeApi for SampleCatalog {
    async fn query_knowledge(&self, query: &KnowledgeQuery) -> ServiceResult<KnowledgeAnswer> {
        let needle = query.query.to_lowercase();
        let arabic = is_arabic(&query.query);

        let answer = CANNED_ANSWERS
            .iter()
            .find(|canned| canned.keywords.iter().any(|k| needle.contains(k)))
            .map(|canned| if arabic { canned.ar } else { canned.en })
            .unwrap_or(if arabic {
                DEFAULT_ANSWER_AR
            } else {
                DEFAULT_ANSWER_EN
            });

        Ok(KnowledgeAnswer {
            answer: answer.to_string(),
        })
    }
}
