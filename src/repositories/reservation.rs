use crate::domain::{Package, Reservation, ReservationDetails, RoomType, User};
use crate::repositories::{by_id, forward_repository, id_values};
use store_object::{DbContext, EntityId, GenericRepository, StoreError};

#[derive(Debug, Clone)]
pub struct ReservationRepository {
    repo: GenericRepository<Reservation>,
}

forward_repository!(ReservationRepository, Reservation);

impl ReservationRepository {
    pub fn new(context: DbContext) -> Self {
        Self {
            repo: GenericRepository::new(context),
        }
    }

    pub fn generic(&self) -> &GenericRepository<Reservation> {
        &self.repo
    }

    /// Active reservations of a hotel with their user, room type and package
    pub async fn list_by_hotel(
        &self,
        hotel_id: EntityId,
    ) -> Result<Vec<ReservationDetails>, StoreError> {
        let reservations = self.repo.find_by_column("hotel_id", hotel_id, false).await?;
        self.with_details(reservations).await
    }

    /// Active reservations of a user with their user, room type and package
    pub async fn list_by_user(
        &self,
        user_id: EntityId,
    ) -> Result<Vec<ReservationDetails>, StoreError> {
        let reservations = self.repo.find_by_column("user_id", user_id, false).await?;
        self.with_details(reservations).await
    }

    /// Load the related rows with one batched query per relation
    async fn with_details(
        &self,
        reservations: Vec<Reservation>,
    ) -> Result<Vec<ReservationDetails>, StoreError> {
        if reservations.is_empty() {
            return Ok(Vec::new());
        }

        let users = by_id(
            self.repo
                .related::<User>()
                .find_by_column_in("id", id_values(reservations.iter().map(|r| r.user_id)), false)
                .await?,
        );
        let room_types = by_id(
            self.repo
                .related::<RoomType>()
                .find_by_column_in(
                    "id",
                    id_values(reservations.iter().map(|r| r.room_type_id)),
                    false,
                )
                .await?,
        );
        let packages = by_id(
            self.repo
                .related::<Package>()
                .find_by_column_in(
                    "id",
                    id_values(reservations.iter().filter_map(|r| r.package_id)),
                    false,
                )
                .await?,
        );

        // Related rows may be shared between reservations
        let details = reservations
            .into_iter()
            .map(|reservation| ReservationDetails {
                user: users.get(&reservation.user_id).cloned(),
                room_type: room_types.get(&reservation.room_type_id).cloned(),
                package: reservation
                    .package_id
                    .and_then(|id| packages.get(&id).cloned()),
                reservation,
            })
            .collect();

        Ok(details)
    }
}
