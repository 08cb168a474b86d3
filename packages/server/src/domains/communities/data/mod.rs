pub mod community;

pub use community::{
    CommunityConnection, CommunityData, CommunityDetailsData, CommunityPostsData, SortOrderData,
};
