use crate::domain::{Hotel, Package, PackageWithHotel};
use crate::repositories::forward_repository;
use store_object::{DbContext, EntityId, GenericRepository, Repository, StoreError};

#[derive(Debug, Clone)]
pub struct PackageRepository {
    repo: GenericRepository<Package>,
}

forward_repository!(PackageRepository, Package);

impl PackageRepository {
    pub fn new(context: DbContext) -> Self {
        Self {
            repo: GenericRepository::new(context),
        }
    }

    pub fn generic(&self) -> &GenericRepository<Package> {
        &self.repo
    }

    pub async fn list_by_hotel(&self, hotel_id: EntityId) -> Result<Vec<Package>, StoreError> {
        self.repo.find_by_column("hotel_id", hotel_id, false).await
    }

    /// An active package with its hotel
    pub async fn get_with_hotel(
        &self,
        package_id: EntityId,
    ) -> Result<Option<PackageWithHotel>, StoreError> {
        let Some(package) = self.repo.get_by_id(package_id, false).await? else {
            return Ok(None);
        };

        let hotel = self
            .repo
            .related::<Hotel>()
            .get_by_id(package.hotel_id, false)
            .await?;

        Ok(Some(PackageWithHotel { package, hotel }))
    }
}
