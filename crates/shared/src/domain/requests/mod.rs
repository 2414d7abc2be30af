mod id;
mod order;
mod page;

pub use self::id::parse_positive_id;
pub use self::order::{
    FindAllOrders, FindOrdersByStatus, OrderListParams, OrderStatus, StatusFilter,
};
pub use self::page::{DEFAULT_LIMIT, DEFAULT_PAGE, PageParams, PageRequest};
