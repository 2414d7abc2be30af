use shared::domain::requests::{FindAllOrders, OrderStatus, StatusFilter};
use sqlx::{Postgres, QueryBuilder};

/// One optional `WHERE` condition on the `orders` table (aliased `o`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Status(StatusFilter),
    UserId(i64),
}

impl Predicate {
    fn push_to(self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Predicate::Status(status) => {
                builder
                    .push("LOWER(o.status) = ")
                    .push_bind(status.as_str().to_string());
            }
            Predicate::UserId(user_id) => {
                builder.push("o.user_id = ").push_bind(user_id);
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub status: Option<StatusFilter>,
    pub user_id: Option<i64>,
}

impl OrderFilter {
    pub fn by_status(status: OrderStatus) -> Self {
        Self {
            status: Some(status.into()),
            user_id: None,
        }
    }

    /// Supplied predicates, always status first then user id.
    pub fn predicates(&self) -> Vec<Predicate> {
        self.status
            .clone()
            .map(Predicate::Status)
            .into_iter()
            .chain(self.user_id.map(Predicate::UserId))
            .collect()
    }

    /// Appends ` WHERE a AND b ...`, or nothing when no filter is set.
    pub fn push_where(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        for (i, predicate) in self.predicates().into_iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            predicate.push_to(builder);
        }
    }
}

impl From<&FindAllOrders> for OrderFilter {
    fn from(req: &FindAllOrders) -> Self {
        Self {
            status: req.status.clone(),
            user_id: req.user_id,
        }
    }
}
