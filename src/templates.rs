use std::sync::OnceLock;
use tera::Tera;

static TERA: OnceLock<Tera> = OnceLock::new();

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("preview.html", include_str!("../templates/preview.html")),
    ("certificate.html", include_str!("../templates/certificate.html")),
    (
        "certificate_page.html",
        include_str!("../templates/certificate_page.html"),
    ),
];

pub fn get_tera() -> &'static Tera {
    TERA.get_or_init(|| {
        let mut tera = Tera::default();
        tera.add_raw_templates(BUILTIN_TEMPLATES.iter().copied())
            .expect("Failed to load templates");
        tera
    })
}
