use sea_orm::DatabaseConnection;
use serde::Serialize;
use thiserror::Error;

use crate::{
    entity::prelude::*,
    error::{validate_email, validate_non_empty, validate_non_negative, validate_url, ValidationError},
    ids::{AboutId, ContactId, SocialLinkId, StatisticsId},
};

#[derive(Debug, Error)]
pub enum SiteServiceError {
    #[error("fatal database error")]
    DbError(#[from] DbErr),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("about record not found")]
    AboutNotFound,

    #[error("statistics record not found")]
    StatisticsNotFound,

    #[error("contact not found")]
    ContactNotFound,

    #[error("social link not found")]
    SocialLinkNotFound,
}

#[derive(Debug, Clone)]
pub struct CreateAbout {
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub profile_photo: Option<String>,
    pub resume: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAbout {
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub profile_photo: Option<String>,
    pub resume: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateStatistics {
    pub years_experience: i32,
    pub projects_completed: i32,
    pub technologies_mastered: i32,
    pub clients_satisfied: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateStatistics {
    pub years_experience: Option<i32>,
    pub projects_completed: Option<i32>,
    pub technologies_mastered: Option<i32>,
    pub clients_satisfied: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct CreateSocialLink {
    pub name: String,
    pub handle: Option<String>,
    pub url: String,
    pub icon: Option<String>,
    pub active: bool,
    pub position: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSocialLink {
    pub name: Option<String>,
    pub handle: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub active: Option<bool>,
    pub position: Option<i32>,
}

/// Everything the landing page needs: the first matching record of each
/// kind, or nothing. Absence is not an error; the renderer degrades.
#[derive(Debug, Clone, Serialize)]
pub struct LandingPage {
    pub about: Option<AboutModel>,
    pub statistics: Option<StatisticsModel>,
    pub contact: Option<ContactModel>,
}

#[derive(Clone)]
pub struct SiteService {
    db: DatabaseConnection,
}

impl SiteService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    // ---- About ----

    pub async fn create_about(
        &self,
        about: CreateAbout,
    ) -> Result<AboutModel, SiteServiceError> {
        validate_non_empty("name", &about.name)?;
        validate_non_empty("role", &about.role)?;

        let about = AboutActiveModel {
            id: Set(AboutId::new()),
            name: Set(about.name),
            role: Set(about.role),
            bio: Set(about.bio),
            profile_photo: Set(about.profile_photo),
            resume: Set(about.resume),
            // updated_at is stamped by the entity on every save
            ..Default::default()
        };

        let about = about.insert(&self.db).await?;
        tracing::debug!(id = %about.id, "created about record");
        Ok(about)
    }

    pub async fn update_about(
        &self,
        about_id: AboutId,
        changes: UpdateAbout,
    ) -> Result<AboutModel, SiteServiceError> {
        if let Some(name) = &changes.name {
            validate_non_empty("name", name)?;
        }
        if let Some(role) = &changes.role {
            validate_non_empty("role", role)?;
        }

        let about = About::find_by_id(about_id)
            .one(&self.db)
            .await?
            .ok_or(SiteServiceError::AboutNotFound)?;

        let mut about: AboutActiveModel = about.into();
        if let Some(name) = changes.name {
            about.name = Set(name);
        }
        if let Some(role) = changes.role {
            about.role = Set(role);
        }
        if let Some(bio) = changes.bio {
            about.bio = Set(Some(bio));
        }
        if let Some(profile_photo) = changes.profile_photo {
            about.profile_photo = Set(Some(profile_photo));
        }
        if let Some(resume) = changes.resume {
            about.resume = Set(Some(resume));
        }

        Ok(about.update(&self.db).await?)
    }

    pub async fn delete_about(&self, about_id: AboutId) -> Result<(), SiteServiceError> {
        let result = About::delete_by_id(about_id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(SiteServiceError::AboutNotFound);
        }
        Ok(())
    }

    /// The first matching about record, or none
    pub async fn about(&self) -> Result<Option<AboutModel>, SiteServiceError> {
        Ok(About::find().one(&self.db).await?)
    }

    // ---- Statistics ----

    pub async fn create_statistics(
        &self,
        statistics: CreateStatistics,
    ) -> Result<StatisticsModel, SiteServiceError> {
        validate_non_negative("years_experience", statistics.years_experience)?;
        validate_non_negative("projects_completed", statistics.projects_completed)?;
        validate_non_negative("technologies_mastered", statistics.technologies_mastered)?;
        if let Some(clients_satisfied) = statistics.clients_satisfied {
            validate_non_negative("clients_satisfied", clients_satisfied)?;
        }

        let statistics = StatisticsActiveModel {
            id: Set(StatisticsId::new()),
            years_experience: Set(statistics.years_experience),
            projects_completed: Set(statistics.projects_completed),
            technologies_mastered: Set(statistics.technologies_mastered),
            clients_satisfied: Set(statistics.clients_satisfied),
        };

        Ok(statistics.insert(&self.db).await?)
    }

    pub async fn update_statistics(
        &self,
        statistics_id: StatisticsId,
        changes: UpdateStatistics,
    ) -> Result<StatisticsModel, SiteServiceError> {
        for (field, value) in [
            ("years_experience", changes.years_experience),
            ("projects_completed", changes.projects_completed),
            ("technologies_mastered", changes.technologies_mastered),
            ("clients_satisfied", changes.clients_satisfied),
        ] {
            if let Some(value) = value {
                validate_non_negative(field, value)?;
            }
        }

        let statistics = Statistics::find_by_id(statistics_id)
            .one(&self.db)
            .await?
            .ok_or(SiteServiceError::StatisticsNotFound)?;

        let mut statistics: StatisticsActiveModel = statistics.into();
        if let Some(years_experience) = changes.years_experience {
            statistics.years_experience = Set(years_experience);
        }
        if let Some(projects_completed) = changes.projects_completed {
            statistics.projects_completed = Set(projects_completed);
        }
        if let Some(technologies_mastered) = changes.technologies_mastered {
            statistics.technologies_mastered = Set(technologies_mastered);
        }
        if let Some(clients_satisfied) = changes.clients_satisfied {
            statistics.clients_satisfied = Set(Some(clients_satisfied));
        }

        Ok(statistics.update(&self.db).await?)
    }

    pub async fn delete_statistics(
        &self,
        statistics_id: StatisticsId,
    ) -> Result<(), SiteServiceError> {
        let result = Statistics::delete_by_id(statistics_id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(SiteServiceError::StatisticsNotFound);
        }
        Ok(())
    }

    /// The first matching statistics record, or none
    pub async fn statistics(&self) -> Result<Option<StatisticsModel>, SiteServiceError> {
        Ok(Statistics::find().one(&self.db).await?)
    }

    // ---- Contact ----

    pub async fn create_contact(
        &self,
        email: String,
        phone: Option<String>,
        address: Option<String>,
    ) -> Result<ContactModel, SiteServiceError> {
        validate_email("email", &email)?;

        let contact = ContactActiveModel {
            id: Set(ContactId::new()),
            email: Set(email),
            phone: Set(phone),
            address: Set(address),
        };

        let contact = contact.insert(&self.db).await?;
        tracing::debug!(id = %contact.id, "created contact");
        Ok(contact)
    }

    pub async fn update_contact(
        &self,
        contact_id: ContactId,
        email: Option<String>,
        phone: Option<String>,
        address: Option<String>,
    ) -> Result<ContactModel, SiteServiceError> {
        if let Some(email) = &email {
            validate_email("email", email)?;
        }

        let contact = Contact::find_by_id(contact_id)
            .one(&self.db)
            .await?
            .ok_or(SiteServiceError::ContactNotFound)?;

        let mut contact: ContactActiveModel = contact.into();
        if let Some(email) = email {
            contact.email = Set(email);
        }
        if let Some(phone) = phone {
            contact.phone = Set(Some(phone));
        }
        if let Some(address) = address {
            contact.address = Set(Some(address));
        }

        Ok(contact.update(&self.db).await?)
    }

    pub async fn delete_contact(&self, contact_id: ContactId) -> Result<(), SiteServiceError> {
        let result = Contact::delete_by_id(contact_id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(SiteServiceError::ContactNotFound);
        }
        Ok(())
    }

    /// The first matching contact record, or none
    pub async fn contact(&self) -> Result<Option<ContactModel>, SiteServiceError> {
        Ok(Contact::find().one(&self.db).await?)
    }

    // ---- Social links ----

    pub async fn create_social_link(
        &self,
        link: CreateSocialLink,
    ) -> Result<SocialLinkModel, SiteServiceError> {
        validate_non_empty("name", &link.name)?;
        validate_url("url", &link.url)?;

        let link = SocialLinkActiveModel {
            id: Set(SocialLinkId::new()),
            name: Set(link.name),
            handle: Set(link.handle),
            url: Set(link.url),
            icon: Set(link.icon),
            active: Set(link.active),
            position: Set(link.position),
        };

        Ok(link.insert(&self.db).await?)
    }

    pub async fn update_social_link(
        &self,
        link_id: SocialLinkId,
        changes: UpdateSocialLink,
    ) -> Result<SocialLinkModel, SiteServiceError> {
        if let Some(name) = &changes.name {
            validate_non_empty("name", name)?;
        }
        if let Some(url) = &changes.url {
            validate_url("url", url)?;
        }

        let link = SocialLink::find_by_id(link_id)
            .one(&self.db)
            .await?
            .ok_or(SiteServiceError::SocialLinkNotFound)?;

        let mut link: SocialLinkActiveModel = link.into();
        if let Some(name) = changes.name {
            link.name = Set(name);
        }
        if let Some(handle) = changes.handle {
            link.handle = Set(Some(handle));
        }
        if let Some(url) = changes.url {
            link.url = Set(url);
        }
        if let Some(icon) = changes.icon {
            link.icon = Set(Some(icon));
        }
        if let Some(active) = changes.active {
            link.active = Set(active);
        }
        if let Some(position) = changes.position {
            link.position = Set(position);
        }

        Ok(link.update(&self.db).await?)
    }

    pub async fn delete_social_link(&self, link_id: SocialLinkId) -> Result<(), SiteServiceError> {
        let result = SocialLink::delete_by_id(link_id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(SiteServiceError::SocialLinkNotFound);
        }
        Ok(())
    }

    /// List all social links in canonical order: position ascending, then
    /// name ascending.
    pub async fn list_social_links(&self) -> Result<Vec<SocialLinkModel>, SiteServiceError> {
        let links = SocialLink::find()
            .order_by_asc(SocialLinkColumn::Position)
            .order_by_asc(SocialLinkColumn::Name)
            .all(&self.db)
            .await?;

        Ok(links)
    }

    /// Only links flagged active, in canonical order
    pub async fn list_active_social_links(
        &self,
    ) -> Result<Vec<SocialLinkModel>, SiteServiceError> {
        let links = SocialLink::find()
            .filter(SocialLinkColumn::Active.eq(true))
            .order_by_asc(SocialLinkColumn::Position)
            .order_by_asc(SocialLinkColumn::Name)
            .all(&self.db)
            .await?;

        Ok(links)
    }

    pub async fn attach_social_link(
        &self,
        contact_id: ContactId,
        link_id: SocialLinkId,
    ) -> Result<(), SiteServiceError> {
        Contact::find_by_id(contact_id)
            .one(&self.db)
            .await?
            .ok_or(SiteServiceError::ContactNotFound)?;
        SocialLink::find_by_id(link_id)
            .one(&self.db)
            .await?
            .ok_or(SiteServiceError::SocialLinkNotFound)?;

        let link = ContactSocialLinkActiveModel {
            contact_id: Set(contact_id),
            social_link_id: Set(link_id),
        };
        ContactSocialLink::insert(link).exec(&self.db).await?;

        Ok(())
    }

    pub async fn detach_social_link(
        &self,
        contact_id: ContactId,
        link_id: SocialLinkId,
    ) -> Result<(), SiteServiceError> {
        ContactSocialLink::delete_many()
            .filter(ContactSocialLinkColumn::ContactId.eq(contact_id))
            .filter(ContactSocialLinkColumn::SocialLinkId.eq(link_id))
            .exec(&self.db)
            .await?;

        Ok(())
    }

    /// Social links of one contact, in canonical order
    pub async fn contact_social_links(
        &self,
        contact_id: ContactId,
    ) -> Result<Vec<SocialLinkModel>, SiteServiceError> {
        let contact = Contact::find_by_id(contact_id)
            .one(&self.db)
            .await?
            .ok_or(SiteServiceError::ContactNotFound)?;

        let links = contact
            .find_related(SocialLink)
            .order_by_asc(SocialLinkColumn::Position)
            .order_by_asc(SocialLinkColumn::Name)
            .all(&self.db)
            .await?;

        Ok(links)
    }

    // ---- Landing page ----

    /// Assemble the single landing-page context: the first matching About,
    /// Statistics and Contact records.
    pub async fn landing_page(&self) -> Result<LandingPage, SiteServiceError> {
        Ok(LandingPage {
            about: self.about().await?,
            statistics: self.statistics().await?,
            contact: self.contact().await?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils;

    fn about(name: &str) -> CreateAbout {
        CreateAbout {
            name: name.to_string(),
            role: "Engineer".to_string(),
            bio: None,
            profile_photo: None,
            resume: None,
        }
    }

    fn social_link(name: &str, position: i32, active: bool) -> CreateSocialLink {
        CreateSocialLink {
            name: name.to_string(),
            handle: None,
            url: "https://example.com/profile".to_string(),
            icon: None,
            active,
            position,
        }
    }

    #[tokio::test]
    async fn landing_page_is_empty_when_nothing_exists() {
        let db = test_utils::setup_test_db().await;
        let service = SiteService::new(db);

        let page = service.landing_page().await.unwrap();
        assert!(page.about.is_none());
        assert!(page.statistics.is_none());
        assert!(page.contact.is_none());
    }

    #[tokio::test]
    async fn landing_page_assembles_first_records() {
        let db = test_utils::setup_test_db().await;
        let service = SiteService::new(db);

        service.create_about(about("Dev")).await.unwrap();
        service
            .create_statistics(CreateStatistics {
                years_experience: 7,
                projects_completed: 24,
                technologies_mastered: 12,
                clients_satisfied: None,
            })
            .await
            .unwrap();
        service
            .create_contact("dev@example.com".to_string(), None, None)
            .await
            .unwrap();

        let page = service.landing_page().await.unwrap();
        assert_eq!(page.about.unwrap().name, "Dev");
        assert_eq!(page.statistics.unwrap().years_experience, 7);
        assert_eq!(page.contact.unwrap().email, "dev@example.com");
    }

    #[tokio::test]
    async fn rejects_negative_counters() {
        let db = test_utils::setup_test_db().await;
        let service = SiteService::new(db);

        let result = service
            .create_statistics(CreateStatistics {
                years_experience: -1,
                projects_completed: 0,
                technologies_mastered: 0,
                clients_satisfied: None,
            })
            .await;
        assert!(matches!(
            result,
            Err(SiteServiceError::Validation(ValidationError::Negative {
                field: "years_experience",
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn rejects_invalid_contact_email() {
        let db = test_utils::setup_test_db().await;
        let service = SiteService::new(db);

        let result = service
            .create_contact("not-an-email".to_string(), None, None)
            .await;
        assert!(matches!(
            result,
            Err(SiteServiceError::Validation(
                ValidationError::InvalidEmail { field: "email" }
            ))
        ));
    }

    #[tokio::test]
    async fn social_links_order_by_position_then_name() {
        let db = test_utils::setup_test_db().await;
        let service = SiteService::new(db);

        for (name, position) in [("Mastodon", 1), ("GitHub", 0), ("Bluesky", 1)] {
            service
                .create_social_link(social_link(name, position, true))
                .await
                .unwrap();
        }

        let names: Vec<String> = service
            .list_social_links()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, ["GitHub", "Bluesky", "Mastodon"]);
    }

    #[tokio::test]
    async fn inactive_links_are_filtered_from_active_listing() {
        let db = test_utils::setup_test_db().await;
        let service = SiteService::new(db);

        service
            .create_social_link(social_link("GitHub", 0, true))
            .await
            .unwrap();
        service
            .create_social_link(social_link("Abandoned", 1, false))
            .await
            .unwrap();

        let active = service.list_active_social_links().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "GitHub");

        // The inactive link stays persisted
        assert_eq!(service.list_social_links().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn contact_carries_its_social_links() {
        let db = test_utils::setup_test_db().await;
        let service = SiteService::new(db);

        let contact = service
            .create_contact("dev@example.com".to_string(), None, None)
            .await
            .unwrap();
        let github = service
            .create_social_link(social_link("GitHub", 0, true))
            .await
            .unwrap();

        service.attach_social_link(contact.id, github.id).await.unwrap();

        let links = service.contact_social_links(contact.id).await.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].name, "GitHub");

        // Deleting the link drops the association via FK cascade
        service.delete_social_link(github.id).await.unwrap();
        let links = service.contact_social_links(contact.id).await.unwrap();
        assert!(links.is_empty());
        assert!(service.contact().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn about_update_keeps_validation() {
        let db = test_utils::setup_test_db().await;
        let service = SiteService::new(db);

        let created = service.create_about(about("Dev")).await.unwrap();

        let result = service
            .update_about(
                created.id,
                UpdateAbout {
                    name: Some("  ".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(SiteServiceError::Validation(ValidationError::Empty {
                field: "name"
            }))
        ));
    }
}
