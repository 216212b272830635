use sqlx::PgPool;

use crate::dto::host::HostDetailResponse;
use crate::error::{Result, StorageError};
use crate::models::{Host, HostAppearanceRow};

pub struct HostRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> HostRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all hosts
    pub async fn list(&self) -> Result<Vec<Host>> {
        let hosts = sqlx::query_as::<_, Host>(
            r#"
            SELECT h.hostid AS id, h.host AS name, h.hostslug AS slug,
                   h.hostgender AS gender, p.pronouns AS pronouns
            FROM ww_hosts h
            LEFT JOIN ww_pronouns p ON p.pronounsid = h.hostpronounsid
            ORDER BY h.host
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(hosts)
    }

    /// Find host by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Host> {
        let host = sqlx::query_as::<_, Host>(
            r#"
            SELECT h.hostid AS id, h.host AS name, h.hostslug AS slug,
                   h.hostgender AS gender, p.pronouns AS pronouns
            FROM ww_hosts h
            LEFT JOIN ww_pronouns p ON p.pronounsid = h.hostpronounsid
            WHERE h.hostid = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(host)
    }

    /// Find host by slug
    pub async fn find_by_slug(&self, slug: &str) -> Result<Host> {
        let host = sqlx::query_as::<_, Host>(
            r#"
            SELECT h.hostid AS id, h.host AS name, h.hostslug AS slug,
                   h.hostgender AS gender, p.pronouns AS pronouns
            FROM ww_hosts h
            LEFT JOIN ww_pronouns p ON p.pronounsid = h.hostpronounsid
            WHERE h.hostslug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(host)
    }

    /// Uniformly random host ID; NotFound when the table is empty
    pub async fn random_id(&self) -> Result<i32> {
        let id =
            sqlx::query_scalar::<_, i32>("SELECT hostid FROM ww_hosts ORDER BY RANDOM() LIMIT 1")
                .fetch_optional(self.pool)
                .await?
                .ok_or(StorageError::NotFound)?;

        Ok(id)
    }

    /// Get detailed host info with appearance history
    pub async fn find_detail_by_id(&self, id: i32) -> Result<HostDetailResponse> {
        let host = self.find_by_id(id).await?;
        let rows = self.appearances(host.id).await?;

        Ok(HostDetailResponse::compose(host, rows))
    }

    pub async fn find_detail_by_slug(&self, slug: &str) -> Result<HostDetailResponse> {
        let host = self.find_by_slug(slug).await?;
        let rows = self.appearances(host.id).await?;

        Ok(HostDetailResponse::compose(host, rows))
    }

    pub async fn list_details(&self) -> Result<Vec<HostDetailResponse>> {
        let hosts = self.list().await?;

        let mut details = Vec::with_capacity(hosts.len());
        for host in hosts {
            let rows = self.appearances(host.id).await?;
            details.push(HostDetailResponse::compose(host, rows));
        }

        Ok(details)
    }

    async fn appearances(&self, host_id: i32) -> Result<Vec<HostAppearanceRow>> {
        let rows = sqlx::query_as::<_, HostAppearanceRow>(
            r#"
            SELECT s.showid AS show_id,
                   s.showdate AS date,
                   s.bestof AS best_of,
                   (s.repeatshowid IS NOT NULL) AS repeat_show,
                   hm.guest AS guest_host
            FROM ww_showhostmap hm
            JOIN ww_shows s ON s.showid = hm.showid
            WHERE hm.hostid = $1
            ORDER BY s.showdate ASC
            "#,
        )
        .bind(host_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
