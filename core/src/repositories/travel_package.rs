//! Travel package repository trait.

use super::Repository;
use crate::domain::entities::TravelPackage;

/// Persistence for travel packages.
///
/// Implementations persist the package itinerary along with the package and
/// return it from `find_by_id` with each destination's activities filled in.
pub trait TravelPackageRepository: Repository<TravelPackage> {}
