//! Builds the parameterized statements for `catalogo` and `pedidos`.

/// Numeric columns are cast to float8 so they decode as f64 and serialize as JSON numbers.
pub const CATALOG_COLUMNS: &str = "id, nombre, categoria, precio::float8 AS precio, stock";
pub const ORDER_COLUMNS: &str = "id, cliente, planta, cantidad, total::float8 AS total";

/// Order fields arrive as text; the store converts them and rejects what it cannot convert.
pub const INSERT_ORDER: &str = "INSERT INTO pedidos (cliente, planta, cantidad, total) \
     VALUES ($1::text, $2::text, $3::text::numeric::integer, $4::text::numeric) RETURNING id";
pub const UPDATE_ORDER: &str = "UPDATE pedidos SET cliente = $1::text, planta = $2::text, \
     cantidad = $3::text::numeric::integer, total = $4::text::numeric WHERE id = $5";
pub const DELETE_ORDER: &str = "DELETE FROM pedidos WHERE id = $1";
pub const PING: &str = "SELECT 1";

#[derive(Debug, PartialEq, Eq)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<String>,
}

impl QueryBuf {
    fn new(sql: String) -> Self {
        QueryBuf {
            sql,
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: &str) -> usize {
        self.params.push(v.to_string());
        self.params.len()
    }
}

/// SELECT over the catalog, optionally restricted to one exact category.
pub fn catalog_select(categoria: Option<&str>) -> QueryBuf {
    let mut q = QueryBuf::new(format!("SELECT {} FROM catalogo", CATALOG_COLUMNS));
    if let Some(c) = categoria {
        let n = q.push_param(c);
        q.sql.push_str(&format!(" WHERE categoria = ${}", n));
    }
    q
}

pub fn orders_select() -> String {
    format!("SELECT {} FROM pedidos", ORDER_COLUMNS)
}
