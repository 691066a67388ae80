//! Global CSS styles for the Sudeva Engineers landing page.
//!
//! Light corporate look: emerald brand colour on white and slate.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BRAND */
  --emerald: #065f46;
  --emerald-dark: #064e3b;
  --emerald-light: #d1fae5;

  /* SLATE (Text, Dark sections) */
  --slate-900: #0f172a;
  --slate-700: #334155;
  --slate-600: #475569;
  --slate-200: #e2e8f0;
  --slate-50: #f8fafc;

  /* SEMANTIC */
  --success: #047857;
  --danger: #b91c1c;
  --info: #1d4ed8;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2.25rem;
  --text-3xl: 3.25rem;

  /* Layout */
  --header-height: 72px;
  --radius: 12px;
  --shadow: 0 10px 30px rgba(15, 23, 42, 0.08);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slide: 1s ease-in-out;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
  scroll-padding-top: var(--header-height);
}

body {
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.6;
  color: var(--slate-900);
  background: #ffffff;
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

img {
  display: block;
  max-width: 100%;
}

.container {
  width: 100%;
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.cover-img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.icon {
  flex-shrink: 0;
}

/* === Header === */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  height: var(--header-height);
  background: rgba(255, 255, 255, 0.95);
  border-bottom: 1px solid var(--slate-200);
  backdrop-filter: blur(8px);
}

.site-header-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 100%;
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.site-header-left {
  display: flex;
  align-items: center;
  gap: 2.5rem;
}

.site-header-right {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.logo-img {
  height: 40px;
  width: auto;
}

.logo-text {
  font-weight: 800;
  letter-spacing: 0.08em;
  color: var(--emerald);
}

.nav-links {
  display: flex;
  gap: 1.75rem;
}

.nav-link {
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--slate-700);
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--emerald);
}

/* Mobile menu */
.mobile-nav {
  position: fixed;
  inset: 0;
  z-index: 60;
  background: #ffffff;
  padding: 1.25rem 1.5rem;
}

.mobile-nav-top {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 2rem;
}

.mobile-nav-title {
  font-weight: 800;
  color: var(--emerald);
}

.mobile-nav-links {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.mobile-nav-link {
  font-size: var(--text-lg);
  font-weight: 600;
}

.mobile-only {
  display: none;
}

/* === Buttons === */
.btn-primary, .btn-light, .btn-outline, .btn-ghost {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.7rem 1.4rem;
  border-radius: 8px;
  border: 2px solid transparent;
  font: inherit;
  font-size: var(--text-sm);
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast),
    border-color var(--transition-fast);
}

.btn-primary {
  background: var(--emerald);
  color: #ffffff;
}

.btn-primary:hover:not(:disabled) {
  background: var(--emerald-dark);
}

.btn-light {
  background: #ffffff;
  color: var(--emerald);
}

.btn-light:hover {
  background: var(--emerald-light);
}

.btn-outline {
  background: var(--emerald);
  color: #ffffff;
  border-color: #ffffff;
}

.btn-outline:hover {
  background: var(--emerald-dark);
}

.btn-ghost {
  background: transparent;
  border-color: var(--slate-200);
  color: var(--slate-900);
}

button:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border: 1px solid var(--slate-200);
  border-radius: 8px;
  background: transparent;
  color: var(--slate-900);
  cursor: pointer;
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  padding-top: var(--header-height);
  color: #ffffff;
  overflow: hidden;
}

.hero-backdrop {
  position: absolute;
  inset: 0;
}

.hero-slide {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: opacity var(--transition-slide);
}

.hero-overlay {
  position: absolute;
  inset: 0;
  background: linear-gradient(90deg, rgba(6, 78, 59, 0.85) 0%, rgba(15, 23, 42, 0.35) 100%);
}

.hero-content {
  position: relative;
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1.5rem;
  width: 100%;
}

.hero-title {
  max-width: 16ch;
  font-size: var(--text-3xl);
  line-height: 1.1;
  font-weight: 800;
}

.hero-subtitle {
  max-width: 48ch;
  margin-top: 1.25rem;
  font-size: var(--text-lg);
  opacity: 0.9;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  margin-top: 2rem;
}

/* === Why us === */
.why-us {
  padding: 4rem 0;
  background: var(--emerald);
  color: #ffffff;
}

.why-us-lead {
  max-width: 60ch;
  margin: 0 auto 2.5rem;
  text-align: center;
  font-size: var(--text-xl);
  font-weight: 600;
}

.feature-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 2rem;
}

.feature {
  text-align: center;
}

.feature-icon {
  width: 56px;
  height: 56px;
  margin: 0 auto 1rem;
}

.feature-title {
  font-size: var(--text-lg);
  margin-bottom: 0.5rem;
}

.feature-body {
  opacity: 0.85;
}

/* === Sections === */
.section {
  padding: 5rem 0;
}

.section.muted {
  background: var(--slate-50);
}

.section.dark {
  background: var(--slate-900);
  color: #ffffff;
}

.section-header {
  max-width: 760px;
  margin: 0 auto 3rem;
  text-align: center;
}

.section-eyebrow {
  display: inline-block;
  margin-bottom: 0.75rem;
  font-size: var(--text-sm);
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--emerald);
}

.section-header.inverted .section-eyebrow {
  color: var(--emerald-light);
}

.section-title {
  font-size: var(--text-2xl);
  line-height: 1.2;
  font-weight: 800;
}

.section-title.display {
  font-size: var(--text-3xl);
}

.section-subtitle {
  margin-top: 0.75rem;
  font-size: var(--text-lg);
  font-weight: 600;
  color: var(--emerald);
}

.section-lead {
  margin-top: 1rem;
  color: var(--slate-600);
}

.section-header.inverted .section-lead {
  color: var(--slate-200);
}

/* === Cards === */
.card-grid {
  display: grid;
  gap: 2rem;
}

.card-grid.two {
  grid-template-columns: repeat(2, 1fr);
}

.card-grid.three {
  grid-template-columns: repeat(3, 1fr);
}

.card-title {
  font-size: var(--text-lg);
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.card-text {
  color: var(--slate-600);
}

.dark .card-text {
  color: var(--slate-200);
}

.service-card, .project-card, .team-card, .channel-card {
  background: #ffffff;
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  overflow: hidden;
}

.service-card-media, .project-card-media {
  height: 280px;
}

.service-card-body, .project-card-body {
  padding: 1.5rem;
}

.showcase-card-media {
  height: 220px;
  border-radius: var(--radius);
  overflow: hidden;
  margin-bottom: 1.25rem;
}

.tag-row {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-top: 1rem;
}

.tag {
  display: inline-block;
  padding: 0.2rem 0.75rem;
  border-radius: 999px;
  background: var(--emerald-light);
  color: var(--emerald);
  font-size: var(--text-sm);
  font-weight: 600;
}

/* === Knowledge === */
.knowledge-list {
  display: flex;
  flex-direction: column;
  gap: 3rem;
}

.knowledge-card {
  display: flex;
  align-items: center;
  gap: 2.5rem;
}

.knowledge-card.reversed {
  flex-direction: row-reverse;
}

.knowledge-media {
  flex: 1;
  height: 320px;
  border-radius: var(--radius);
  overflow: hidden;
}

.knowledge-body {
  flex: 1;
}

.knowledge-body .tag {
  margin-bottom: 0.75rem;
}

/* === About & Team === */
.about {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
  align-items: center;
}

.about-point {
  margin-top: 1.5rem;
}

.about-media {
  height: 420px;
  border-radius: var(--radius);
  overflow: hidden;
}

.team-card {
  padding: 2rem;
  text-align: center;
}

.team-photo {
  width: 140px;
  height: 140px;
  margin: 0 auto 1rem;
  border-radius: 50%;
  object-fit: cover;
}

.team-name {
  font-size: var(--text-lg);
}

.team-role {
  margin-bottom: 0.75rem;
  color: var(--emerald);
  font-weight: 600;
}

.social-row {
  display: flex;
  justify-content: center;
  gap: 0.75rem;
  margin-top: 1rem;
}

.social-link {
  color: var(--slate-600);
  transition: color var(--transition-fast);
}

.social-link:hover {
  color: var(--emerald);
}

/* === Contact === */
.contact-layout {
  display: grid;
  grid-template-columns: 1fr 1.4fr;
  gap: 2.5rem;
}

.channel-list {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.channel-card {
  padding: 1.5rem;
}

.channel-icon {
  display: inline-flex;
  margin-bottom: 0.75rem;
  color: var(--emerald);
}

.channel-action {
  display: inline-block;
  margin-top: 0.5rem;
  font-weight: 600;
  color: var(--emerald);
  text-decoration: underline;
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 2rem;
  background: #ffffff;
  border-radius: var(--radius);
  box-shadow: var(--shadow);
}

/* === Form fields === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.input-label {
  font-size: var(--text-sm);
  font-weight: 600;
}

.input-hint {
  font-weight: 400;
  color: var(--slate-600);
}

.input-field {
  width: 100%;
  padding: 0.7rem 0.9rem;
  border: 1px solid var(--slate-200);
  border-radius: 8px;
  font: inherit;
  color: var(--slate-900);
  background: #ffffff;
  transition: border-color var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--emerald);
}

.input-field.textarea {
  resize: vertical;
}

/* === Status lines === */
.status-line {
  font-size: var(--text-sm);
  font-weight: 500;
}

.status-line.sending {
  color: var(--info);
}

.status-line.success {
  color: var(--success);
}

.status-line.error {
  color: var(--danger);
}

.site-footer .status-line.success {
  color: var(--emerald-light);
}

.site-footer .status-line.error {
  color: #fca5a5;
}

/* === Footer === */
.site-footer {
  padding: 4rem 0 2rem;
  background: var(--slate-900);
  color: var(--slate-200);
}

.footer-grid {
  display: grid;
  grid-template-columns: 2fr 1fr 1fr;
  gap: 3rem;
}

.footer-text {
  margin: 1rem 0;
}

.newsletter-form {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.newsletter-row {
  display: flex;
  gap: 0.5rem;
}

.newsletter-row .form-field {
  flex: 1;
}

.footer-links, .footer-social {
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
}

.footer-heading {
  color: #ffffff;
  margin-bottom: 0.4rem;
}

.footer-link {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
  transition: color var(--transition-fast);
}

.footer-link:hover {
  color: #ffffff;
}

.footer-bottom {
  display: flex;
  justify-content: space-between;
  margin-top: 3rem;
  padding-top: 1.5rem;
  border-top: 1px solid var(--slate-700);
  font-size: var(--text-sm);
}

.footer-legal {
  display: flex;
  gap: 1.5rem;
}

/* === Responsive === */
@media (max-width: 900px) {
  .nav-links, .desktop-only {
    display: none;
  }

  .mobile-only {
    display: inline-flex;
  }

  .mobile-nav.mobile-only {
    display: block;
  }

  .hero-title {
    font-size: var(--text-2xl);
  }

  .feature-grid,
  .card-grid.two,
  .card-grid.three,
  .about,
  .contact-layout,
  .footer-grid {
    grid-template-columns: 1fr;
  }

  .knowledge-card,
  .knowledge-card.reversed {
    flex-direction: column;
  }

  .knowledge-media {
    width: 100%;
    flex: none;
  }

  .footer-bottom {
    flex-direction: column;
    gap: 1rem;
  }
}
"#;
