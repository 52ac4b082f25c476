use sea_orm::{
    ColumnTrait, Condition, EntityTrait, QueryFilter, Select,
    sea_query::{Expr, Func, LikeExpr},
};

/// Case-insensitive multi-term text search over a set of columns.
pub trait SearchText {
    /// Split `terms` on whitespace; every term must appear as a literal
    /// substring of at least one of `columns`. Blank input leaves the query
    /// untouched.
    ///
    /// Case folding covers ASCII letters only, matching SQLite's `LOWER`.
    fn search_text<C: ColumnTrait>(self, columns: &[C], terms: &str) -> Self;
}

impl<E> SearchText for Select<E>
where
    E: EntityTrait,
{
    fn search_text<C: ColumnTrait>(self, columns: &[C], terms: &str) -> Self {
        let mut all = Condition::all();
        let mut any_term = false;
        for term in terms.split_whitespace() {
            any_term = true;
            let pattern = format!("%{}%", escape_like(&term.to_ascii_lowercase()));
            let mut any = Condition::any();
            for column in columns {
                any = any.add(
                    Expr::expr(Func::lower(Expr::col(column.as_column_ref())))
                        .like(LikeExpr::new(pattern.clone()).escape('\\')),
                );
            }
            all = all.add(any);
        }
        if any_term { self.filter(all) } else { self }
    }
}

/// Escape `LIKE` wildcards so `term` only matches itself.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
