//! In-memory repository fakes for service tests

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{
    AccountStatus, Announcement, AnnouncementRepositoryInterface, AnnouncementWithCount,
    CompletionStatus, Course, CourseInputDto, CourseRepositoryInterface, CreateUserDto,
    Enrollment, EnrollmentRepositoryInterface, NewAnnouncement, NewEnrollment, RecipientInfo,
    RecipientStatus, UpdateIdsDto, UpdateProfileDto, User, UserRepositoryInterface, UserRole,
};
use crate::shared::{DomainError, DomainResult};

// ── Users ───────────────────────────────────────────────────────

pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl UserRepositoryInterface for InMemoryUserRepo {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == dto.email) {
            return Err(DomainError::Conflict("Email already in use".into()));
        }
        let now = Utc::now();
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            full_name: dto.full_name,
            email: dto.email,
            password_hash: dto.password_hash,
            role: dto.role.unwrap_or(UserRole::Student),
            hometown: None,
            contact_number: None,
            status: None,
            nic: None,
            sex: None,
            date_of_birth: None,
            account_status: AccountStatus::Active,
            student_id: None,
            batch_id: None,
            is_verified: dto.is_verified,
            verification_token: dto.verification_token,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn get_user_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn get_user_by_verification_token(&self, token: &str) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.verification_token.as_deref() == Some(token))
            .cloned())
    }

    async fn list_users(&self) -> DomainResult<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn list_users_by_ids(&self, ids: &[i64]) -> DomainResult<Vec<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn list_users_by_batch(&self, batch_id: &str) -> DomainResult<Vec<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.batch_id.as_deref() == Some(batch_id))
            .cloned()
            .collect())
    }

    async fn update_profile(&self, id: i64, dto: UpdateProfileDto) -> DomainResult<Option<User>> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(full_name) = dto.full_name {
            user.full_name = full_name;
        }
        if let Some(hometown) = dto.hometown {
            user.hometown = Some(hometown);
        }
        if let Some(contact_number) = dto.contact_number {
            user.contact_number = Some(contact_number);
        }
        if let Some(status) = dto.status {
            user.status = Some(status);
        }
        if let Some(nic) = dto.nic {
            user.nic = Some(nic);
        }
        if let Some(sex) = dto.sex {
            user.sex = Some(sex);
        }
        if let Some(date_of_birth) = dto.date_of_birth {
            user.date_of_birth = Some(date_of_birth);
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn update_ids(&self, id: i64, dto: UpdateIdsDto) -> DomainResult<Option<User>> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(student_id) = dto.student_id {
            user.student_id = Some(student_id);
        }
        if let Some(batch_id) = dto.batch_id {
            user.batch_id = Some(batch_id);
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn update_account_status(
        &self,
        id: i64,
        status: AccountStatus,
    ) -> DomainResult<Option<User>> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        user.account_status = status;
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn mark_verified(&self, id: i64) -> DomainResult<()> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            });
        };
        user.is_verified = true;
        user.verification_token = None;
        Ok(())
    }
}

// ── Courses ─────────────────────────────────────────────────────

pub struct InMemoryCourseRepo {
    courses: Mutex<Vec<Course>>,
    next_id: AtomicI64,
}

impl InMemoryCourseRepo {
    pub fn new() -> Self {
        Self {
            courses: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

fn apply_course_input(id: i64, dto: CourseInputDto, created_at: chrono::DateTime<Utc>) -> Course {
    Course {
        id,
        title: dto.title,
        description: dto.description,
        image: dto.image,
        mode: dto.mode,
        level: dto.level,
        price: dto.price,
        rating: dto.rating,
        reviews: dto.reviews,
        total_participants: dto.total_participants,
        certificate_providers: dto.certificate_providers,
        promo_code: dto.promo_code,
        demo_certificate: dto.demo_certificate,
        created_at,
        updated_at: Utc::now(),
    }
}

#[async_trait]
impl CourseRepositoryInterface for InMemoryCourseRepo {
    async fn list_courses(&self) -> DomainResult<Vec<Course>> {
        Ok(self.courses.lock().unwrap().clone())
    }

    async fn get_course_by_id(&self, id: i64) -> DomainResult<Option<Course>> {
        Ok(self
            .courses
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn create_course(&self, dto: CourseInputDto) -> DomainResult<Course> {
        let mut courses = self.courses.lock().unwrap();
        let course = apply_course_input(
            self.next_id.fetch_add(1, Ordering::SeqCst),
            dto,
            Utc::now(),
        );
        courses.push(course.clone());
        Ok(course)
    }

    async fn update_course(&self, id: i64, dto: CourseInputDto) -> DomainResult<Option<Course>> {
        let mut courses = self.courses.lock().unwrap();
        let Some(slot) = courses.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        *slot = apply_course_input(id, dto, slot.created_at);
        Ok(Some(slot.clone()))
    }

    async fn delete_course(&self, id: i64) -> DomainResult<()> {
        let mut courses = self.courses.lock().unwrap();
        let before = courses.len();
        courses.retain(|c| c.id != id);
        if courses.len() == before {
            return Err(DomainError::NotFound {
                entity: "Course",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}

// ── Enrollments ─────────────────────────────────────────────────

pub struct InMemoryEnrollmentRepo {
    enrollments: Mutex<Vec<Enrollment>>,
    next_id: AtomicI64,
}

impl InMemoryEnrollmentRepo {
    pub fn new() -> Self {
        Self {
            enrollments: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl EnrollmentRepositoryInterface for InMemoryEnrollmentRepo {
    async fn create_enrollment(&self, row: NewEnrollment) -> DomainResult<Enrollment> {
        let mut enrollments = self.enrollments.lock().unwrap();
        if enrollments
            .iter()
            .any(|e| e.user_id == row.user_id && e.course_id == row.course_id)
        {
            return Err(DomainError::Conflict(
                "User has already enrolled in this course".into(),
            ));
        }
        let enrollment = Enrollment {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            user_id: row.user_id,
            course_id: row.course_id,
            selected_course_title: row.selected_course_title,
            completion_status: row.completion_status,
            certificate_url: row.certificate_url,
            enrolled_date: row.enrolled_date,
        };
        enrollments.push(enrollment.clone());
        Ok(enrollment)
    }

    async fn list_for_user(&self, user_id: i64) -> DomainResult<Vec<Enrollment>> {
        Ok(self
            .enrollments
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_user_and_course(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> DomainResult<Option<Enrollment>> {
        Ok(self
            .enrollments
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.user_id == user_id && e.course_id == course_id)
            .cloned())
    }

    async fn delete_by_user_and_course(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> DomainResult<bool> {
        let mut enrollments = self.enrollments.lock().unwrap();
        let before = enrollments.len();
        enrollments.retain(|e| !(e.user_id == user_id && e.course_id == course_id));
        Ok(enrollments.len() < before)
    }

    async fn set_certificate_url(
        &self,
        enrollment_id: i64,
        certificate_url: &str,
    ) -> DomainResult<Option<Enrollment>> {
        let mut enrollments = self.enrollments.lock().unwrap();
        let Some(enrollment) = enrollments.iter_mut().find(|e| e.id == enrollment_id) else {
            return Ok(None);
        };
        enrollment.certificate_url = Some(certificate_url.to_string());
        Ok(Some(enrollment.clone()))
    }

    async fn set_completion_status(
        &self,
        enrollment_id: i64,
        status: CompletionStatus,
    ) -> DomainResult<Option<Enrollment>> {
        let mut enrollments = self.enrollments.lock().unwrap();
        let Some(enrollment) = enrollments.iter_mut().find(|e| e.id == enrollment_id) else {
            return Ok(None);
        };
        enrollment.completion_status = status;
        Ok(Some(enrollment.clone()))
    }
}

// ── Announcements ───────────────────────────────────────────────

pub struct InMemoryAnnouncementRepo {
    announcements: Mutex<Vec<Announcement>>,
    // (announcement_id, user_id)
    recipients: Mutex<Vec<(i64, i64)>>,
    next_id: AtomicI64,
}

impl InMemoryAnnouncementRepo {
    pub fn new() -> Self {
        Self {
            announcements: Mutex::new(Vec::new()),
            recipients: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn recipient_ids(&self, announcement_id: i64) -> Vec<i64> {
        self.recipients
            .lock()
            .unwrap()
            .iter()
            .filter(|(a, _)| *a == announcement_id)
            .map(|(_, u)| *u)
            .collect()
    }

    fn count(&self, announcement_id: i64) -> u64 {
        self.recipients
            .lock()
            .unwrap()
            .iter()
            .filter(|(a, _)| *a == announcement_id)
            .count() as u64
    }
}

#[async_trait]
impl AnnouncementRepositoryInterface for InMemoryAnnouncementRepo {
    async fn create_announcement(&self, row: NewAnnouncement) -> DomainResult<Announcement> {
        let announcement = Announcement {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: row.title,
            message: row.message,
            target_type: row.target_type,
            batch_id: row.batch_id,
            created_by: row.created_by,
            created_at: Utc::now(),
        };
        self.announcements
            .lock()
            .unwrap()
            .push(announcement.clone());
        Ok(announcement)
    }

    async fn add_recipients(&self, announcement_id: i64, user_ids: &[i64]) -> DomainResult<()> {
        let mut recipients = self.recipients.lock().unwrap();
        for user_id in user_ids {
            recipients.push((announcement_id, *user_id));
        }
        Ok(())
    }

    async fn get_announcement_by_id(&self, id: i64) -> DomainResult<Option<Announcement>> {
        Ok(self
            .announcements
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn list_announcements(&self) -> DomainResult<Vec<AnnouncementWithCount>> {
        let announcements = self.announcements.lock().unwrap().clone();
        Ok(announcements
            .into_iter()
            .map(|a| {
                let recipient_count = self.count(a.id);
                AnnouncementWithCount {
                    announcement: a,
                    recipient_count,
                }
            })
            .collect())
    }

    async fn list_recipients(&self, announcement_id: i64) -> DomainResult<Vec<RecipientInfo>> {
        Ok(self
            .recipient_ids(announcement_id)
            .into_iter()
            .map(|user_id| RecipientInfo {
                user_id,
                full_name: format!("user-{}", user_id),
                email: format!("user-{}@example.com", user_id),
                batch_id: None,
                status: RecipientStatus::Unread,
            })
            .collect())
    }

    async fn list_for_user(&self, user_id: i64) -> DomainResult<Vec<AnnouncementWithCount>> {
        let targeted: Vec<i64> = self
            .recipients
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, u)| *u == user_id)
            .map(|(a, _)| *a)
            .collect();

        let announcements = self.announcements.lock().unwrap().clone();
        Ok(announcements
            .into_iter()
            .filter(|a| targeted.contains(&a.id))
            .map(|a| {
                let recipient_count = self.count(a.id);
                AnnouncementWithCount {
                    announcement: a,
                    recipient_count,
                }
            })
            .collect())
    }

    async fn delete_announcement(&self, id: i64) -> DomainResult<()> {
        let mut announcements = self.announcements.lock().unwrap();
        let before = announcements.len();
        announcements.retain(|a| a.id != id);
        if announcements.len() == before {
            return Err(DomainError::NotFound {
                entity: "Announcement",
                field: "id",
                value: id.to_string(),
            });
        }
        self.recipients.lock().unwrap().retain(|(a, _)| *a != id);
        Ok(())
    }
}
