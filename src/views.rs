use tera::{Context, Tera};

use crate::employees::{Employee, EmployeeStatus};

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

/// Turns employee data into HTML pages.
pub trait ViewRenderer: Send + Sync {
    fn render_list(&self, employees: &[Employee]) -> Result<String, ViewError>;
    fn render_form(&self) -> Result<String, ViewError>;
    fn render_detail(&self, employee: &Employee) -> Result<String, ViewError>;
}

/// Tera templates compiled into the binary.
pub struct TeraViews {
    tera: Tera,
}

impl TeraViews {
    pub fn new() -> Result<Self, ViewError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../templates/base.html")),
            ("index.html", include_str!("../templates/index.html")),
            ("add.html", include_str!("../templates/add.html")),
            ("details.html", include_str!("../templates/details.html")),
        ])?;
        Ok(Self { tera })
    }
}

impl ViewRenderer for TeraViews {
    fn render_list(&self, employees: &[Employee]) -> Result<String, ViewError> {
        let mut ctx = Context::new();
        ctx.insert("employees", employees);
        Ok(self.tera.render("index.html", &ctx)?)
    }

    fn render_form(&self) -> Result<String, ViewError> {
        Ok(self.tera.render("add.html", &Context::new())?)
    }

    fn render_detail(&self, employee: &Employee) -> Result<String, ViewError> {
        let mut ctx = Context::new();
        ctx.insert("employee", employee);
        ctx.insert("statuses", &EmployeeStatus::ALL);
        Ok(self.tera.render("details.html", &ctx)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn employee(id: i32, name: &str, status: EmployeeStatus) -> Employee {
        let now = OffsetDateTime::now_utc();
        Employee {
            id,
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            department: Some("R&D".into()),
            role: None,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn list_renders_every_employee_escaped() {
        let views = TeraViews::new().expect("templates compile");
        let html = views
            .render_list(&[
                employee(1, "Ada", EmployeeStatus::Pending),
                employee(2, "<b>Bob</b>", EmployeeStatus::Active),
            ])
            .unwrap();
        assert!(html.contains("Ada"));
        assert!(html.contains("R&amp;D"));
        assert!(html.contains("&lt;b&gt;Bob&lt;&#x2F;b&gt;"));
        assert!(html.contains("/employee/2"));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let views = TeraViews::new().unwrap();
        let html = views.render_list(&[]).unwrap();
        assert!(html.contains("No employees yet"));
    }

    #[test]
    fn form_posts_to_add() {
        let views = TeraViews::new().unwrap();
        let html = views.render_form().unwrap();
        assert!(html.contains(r#"action="/add""#));
        assert!(html.contains(r#"name="email""#));
    }

    #[test]
    fn detail_marks_current_status() {
        let views = TeraViews::new().unwrap();
        let html = views
            .render_detail(&employee(5, "Cleo", EmployeeStatus::Inactive))
            .unwrap();
        assert!(html.contains("Cleo"));
        assert!(html.contains(r#"action="/employee/5/status""#));
        assert!(html.contains(r#"action="/employee/5/delete""#));
        assert!(html.contains(r#"<option value="inactive" selected>"#));
        assert!(html.contains(r#"<option value="active">"#));
    }
}
