//! Global CSS for the portfolio shell and pages.
//!
//! Dark is the default palette; `data-theme="light"` on the app root
//! swaps the custom properties. Page transition durations here must stay
//! in step with the timer constants in the page transition component.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* DARK (default) */
  --bg: #0b1120;
  --bg-alt: #111a2e;
  --surface: #16213b;
  --border: #24314f;
  --text: #e7ecf6;
  --text-muted: rgba(231, 236, 246, 0.65);

  /* ACCENT */
  --accent: #3b82f6;
  --accent-strong: #2563eb;
  --accent-soft: rgba(59, 130, 246, 0.15);

  /* SEMANTIC */
  --success: #22c55e;
  --danger: #ef4444;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 250ms ease;
}

[data-theme="light"] {
  --bg: #f8fafc;
  --bg-alt: #eef2f8;
  --surface: #ffffff;
  --border: #dbe2ee;
  --text: #101828;
  --text-muted: rgba(16, 24, 40, 0.65);
  --accent-soft: rgba(59, 130, 246, 0.12);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body, .app-root {
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text);
  line-height: 1.6;
  min-height: 100vh;
}

.app-root {
  display: flex;
  flex-direction: column;
  transition: background var(--transition-normal), color var(--transition-normal);
}

a {
  color: inherit;
  text-decoration: none;
}

button {
  font: inherit;
  cursor: pointer;
  background: none;
  border: none;
  color: inherit;
}

svg {
  display: inline-block;
  vertical-align: middle;
}

/* === Layout === */
.site-main {
  flex: 1;
  width: 100%;
}

.section-inner {
  max-width: 1100px;
  margin: 0 auto;
  padding: 3rem 1.5rem;
}

.section {
  padding: 1rem 0;
}

.section-alt {
  background: var(--bg-alt);
}

.section-head {
  text-align: center;
  max-width: 640px;
  margin: 0 auto 2.5rem;
}

.centered {
  text-align: center;
}

.muted {
  color: var(--text-muted);
}

.lead {
  font-size: 1.15rem;
}

.page-head {
  text-align: center;
  max-width: 680px;
  margin: 0 auto 3rem;
}

.page-title {
  font-size: 2.5rem;
  font-weight: 700;
  margin-bottom: 0.75rem;
}

.section-title {
  font-size: 1.75rem;
  font-weight: 700;
  margin-bottom: 0.75rem;
}

/* === Page transitions === */
.page-shell.page-enter {
  animation: page-in 320ms ease both;
}

.page-shell.page-exit {
  animation: page-out 220ms ease both;
  pointer-events: none;
}

@keyframes page-in {
  from { opacity: 0; transform: translateY(16px); }
  to   { opacity: 1; transform: translateY(0); }
}

@keyframes page-out {
  from { opacity: 1; transform: translateY(0); }
  to   { opacity: 0; transform: translateY(-16px); }
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.65rem 1.4rem;
  border-radius: 9999px;
  font-weight: 600;
  font-size: 0.95rem;
  transition: background var(--transition-fast), color var(--transition-fast),
              border-color var(--transition-fast), transform var(--transition-fast);
}

.btn:hover {
  transform: translateY(-1px);
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
  transform: none;
}

.btn-primary {
  background: var(--accent);
  color: #ffffff;
}

.btn-primary:hover {
  background: var(--accent-strong);
}

.btn-outline {
  border: 1px solid var(--border);
  color: var(--text);
}

.btn-outline:hover {
  border-color: var(--accent);
  color: var(--accent);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.5rem;
  border-radius: 0.5rem;
  color: var(--text-muted);
  transition: color var(--transition-fast), background var(--transition-fast);
}

.icon-btn:hover {
  color: var(--accent);
  background: var(--accent-soft);
}

.icon-btn.round {
  border: 1px solid var(--border);
  border-radius: 9999px;
  width: 2.75rem;
  height: 2.75rem;
}

/* === Navbar === */
.navbar {
  position: sticky;
  top: 0;
  z-index: 40;
  background: var(--bg);
  border-bottom: 1px solid var(--border);
  transition: background var(--transition-normal);
}

.navbar-inner {
  max-width: 1100px;
  margin: 0 auto;
  padding: 0.85rem 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.navbar-brand {
  font-size: 1.2rem;
  font-weight: 700;
  color: var(--accent);
}

.navbar-links {
  display: flex;
  align-items: center;
  gap: 0.25rem;
}

.nav-link {
  padding: 0.45rem 0.9rem;
  border-radius: 0.5rem;
  font-size: 0.95rem;
  color: var(--text-muted);
  transition: color var(--transition-fast), background var(--transition-fast);
}

.nav-link:hover {
  color: var(--text);
}

.nav-link.active {
  color: var(--accent);
  background: var(--accent-soft);
}

.navbar-burger {
  display: none;
}

.navbar-menu {
  display: none;
}

/* === Footer === */
.footer {
  background: var(--bg-alt);
  border-top: 1px solid var(--border);
  margin-top: 3rem;
}

.footer-inner {
  max-width: 1100px;
  margin: 0 auto;
}

.footer-grid {
  padding: 2.5rem 1.5rem 1.5rem;
  display: grid;
  grid-template-columns: 2fr 1fr 1fr;
  gap: 2rem;
}

.footer-brand {
  font-size: 1.1rem;
  font-weight: 700;
  color: var(--accent);
}

.footer-blurb {
  color: var(--text-muted);
  font-size: 0.95rem;
  max-width: 320px;
  margin-top: 0.5rem;
}

.footer-heading {
  font-size: 1rem;
  margin-bottom: 0.75rem;
}

.footer-list {
  list-style: none;
  color: var(--text-muted);
  font-size: 0.95rem;
}

.footer-list li {
  margin-bottom: 0.4rem;
}

.footer-link {
  color: var(--text-muted);
  font-size: 0.95rem;
  transition: color var(--transition-fast);
}

.footer-link:hover {
  color: var(--accent);
}

.footer-socials {
  display: flex;
  gap: 0.5rem;
  margin-top: 0.75rem;
}

.footer-bottom {
  text-align: center;
  padding: 1rem 1.5rem 1.5rem;
  font-size: 0.85rem;
  color: var(--text-muted);
  border-top: 1px solid var(--border);
}

/* === Cards === */
.card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 0.9rem;
  padding: 1.5rem;
  transition: border-color var(--transition-fast), transform var(--transition-fast);
}

.card:hover {
  border-color: var(--accent);
}

.card-grid {
  display: grid;
  gap: 1.5rem;
}

.card-grid.two {
  grid-template-columns: repeat(2, 1fr);
}

.card-grid.three {
  grid-template-columns: repeat(3, 1fr);
}

.highlight-card, .value-card {
  text-align: center;
}

.highlight-icon, .value-icon, .channel-icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 3.25rem;
  height: 3.25rem;
  border-radius: 0.75rem;
  background: var(--accent-soft);
  color: var(--accent);
  margin-bottom: 1rem;
}

/* === Hero === */
.hero {
  padding: 4rem 0 2rem;
}

.hero-inner {
  max-width: 1100px;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: grid;
  grid-template-columns: auto 1fr auto;
  align-items: center;
  gap: 2.5rem;
}

.hero-socials {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.hero-title {
  font-size: 2.75rem;
  font-weight: 800;
  line-height: 1.15;
}

.hero-role {
  font-size: 1.25rem;
  color: var(--accent);
  font-weight: 600;
  margin: 0.5rem 0 1rem;
}

.hero-intro {
  max-width: 480px;
  margin-bottom: 1.5rem;
}

.hero-actions {
  display: flex;
  gap: 1rem;
}

.hero-portrait {
  position: relative;
}

.portrait-frame {
  width: 230px;
  height: 230px;
  border-radius: 50%;
  background: linear-gradient(135deg, var(--accent), #22d3ee);
  display: flex;
  align-items: center;
  justify-content: center;
}

.portrait-initials {
  font-size: 4rem;
  font-weight: 800;
  color: #ffffff;
}

.portrait-badge {
  position: absolute;
  bottom: 0.5rem;
  right: -0.5rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 9999px;
  padding: 0.35rem 0.9rem;
  font-size: 0.85rem;
  font-weight: 600;
}

/* === CTA panel === */
.cta-panel {
  text-align: center;
  background: var(--accent-soft);
  border: 1px solid var(--border);
  border-radius: 1rem;
  padding: 3rem 2rem;
}

.cta-panel p {
  max-width: 520px;
  margin: 0 auto 1.5rem;
}

/* === Projects === */
.project-card {
  display: flex;
  flex-direction: column;
  padding: 0;
  overflow: hidden;
}

.project-media {
  position: relative;
  height: 180px;
  background: linear-gradient(135deg, var(--accent), #22d3ee);
  overflow: hidden;
}

.project-media img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.project-primary-tag {
  position: absolute;
  top: 0.75rem;
  left: 0.75rem;
  z-index: 1;
  font-size: 0.75rem;
  font-weight: 600;
  padding: 0.25rem 0.7rem;
  border-radius: 9999px;
  background: rgba(0, 0, 0, 0.55);
  color: #ffffff;
}

.project-title {
  font-size: 1.15rem;
}

.project-body {
  padding: 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  flex: 1;
}

.tag-row {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
}

.tag {
  font-size: 0.75rem;
  padding: 0.2rem 0.6rem;
  border-radius: 9999px;
  background: var(--accent-soft);
  color: var(--accent);
}

.link-btn {
  display: inline-flex;
  align-items: center;
  gap: 0.3rem;
  color: var(--accent);
  font-weight: 600;
  font-size: 0.9rem;
  align-self: flex-start;
}

.project-details {
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
  font-size: 0.9rem;
}

.details-heading {
  font-size: 0.95rem;
}

.feature-list {
  list-style: disc;
  padding-left: 1.25rem;
  color: var(--text-muted);
}

.strong {
  font-weight: 600;
}

.project-actions {
  display: flex;
  gap: 0.75rem;
  margin-top: 0.5rem;
}

.btn-sm {
  padding: 0.45rem 1rem;
  font-size: 0.85rem;
}

.search-bar {
  position: relative;
  max-width: 520px;
  margin: 0 auto 2.5rem;
}

.search-icon {
  position: absolute;
  left: 0.9rem;
  top: 50%;
  transform: translateY(-50%);
  color: var(--text-muted);
}

.search-input {
  padding-left: 2.6rem;
}

.empty-state {
  text-align: center;
  padding: 3rem 1rem;
  color: var(--text-muted);
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
}

/* === Skills === */
.skill-category {
  margin-bottom: 3rem;
}

.skill-category-head {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1.25rem;
}

.skill-category-icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.75rem;
  height: 2.75rem;
  border-radius: 0.75rem;
  color: #ffffff;
}

.hex-grid {
  display: flex;
  flex-wrap: wrap;
  gap: 0.9rem;
}

.hex-tile {
  width: 7.5rem;
  height: 6.5rem;
  clip-path: polygon(25% 0%, 75% 0%, 100% 50%, 75% 100%, 25% 100%, 0% 50%);
  background: var(--tile-gradient);
  color: #ffffff;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 0 0.9rem;
  text-align: center;
  font-size: 0.8rem;
  font-weight: 600;
  transition: transform var(--transition-fast), opacity var(--transition-fast);
}

.hex-tile:hover {
  transform: scale(1.07);
}

/* === Modal === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.55);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 60;
}

.modal-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 1rem;
  padding: 2rem;
  max-width: 420px;
  width: calc(100% - 3rem);
  text-align: center;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  align-items: center;
}

/* === Timeline === */
.timeline-section {
  margin: 3rem 0;
}

.timeline {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  border-left: 2px solid var(--border);
  padding-left: 1.75rem;
}

.timeline-entry {
  position: relative;
  display: flex;
  gap: 1rem;
  align-items: flex-start;
}

.timeline-dot {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.75rem;
  height: 2.75rem;
  border-radius: 50%;
  background: var(--accent-soft);
  color: var(--accent);
  flex-shrink: 0;
}

.timeline-year {
  font-size: 0.85rem;
  font-weight: 600;
}

/* === About === */
.resume-card {
  margin-bottom: 3rem;
}

.resume-actions {
  display: flex;
  gap: 1rem;
  margin-top: 1rem;
}

/* === Contact === */
.contact-layout {
  display: grid;
  grid-template-columns: 1fr 1.5fr;
  gap: 2rem;
  align-items: start;
}

.contact-channels {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.channel-card {
  display: flex;
  gap: 1rem;
  align-items: center;
}

.channel-card .channel-icon {
  margin-bottom: 0;
  flex-shrink: 0;
}

.contact-fields {
  display: flex;
  flex-direction: column;
  gap: 0.9rem;
  margin-top: 1rem;
}

.input {
  width: 100%;
  padding: 0.7rem 0.9rem;
  border-radius: 0.6rem;
  border: 1px solid var(--border);
  background: var(--bg);
  color: var(--text);
  font: inherit;
  transition: border-color var(--transition-fast);
}

.input:focus {
  outline: none;
  border-color: var(--accent);
}

.contact-textarea {
  min-height: 9rem;
  resize: vertical;
}

.form-error {
  color: var(--danger);
  font-size: 0.9rem;
}

.form-success {
  text-align: center;
  padding: 2rem 1rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  color: var(--success);
}

.form-success p, .form-success button {
  color: var(--text-muted);
}

/* === Not found === */
.not-found-code {
  font-size: 5rem;
  font-weight: 800;
  color: var(--accent);
}

.not-found .section-inner {
  padding-top: 6rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

/* === Responsive === */
@media (max-width: 900px) {
  .hero-inner {
    grid-template-columns: 1fr;
    text-align: center;
  }

  .hero-socials {
    flex-direction: row;
    justify-content: center;
  }

  .hero-actions {
    justify-content: center;
  }

  .hero-portrait {
    margin: 0 auto;
  }

  .card-grid.two, .card-grid.three {
    grid-template-columns: 1fr;
  }

  .contact-layout {
    grid-template-columns: 1fr;
  }

  .footer-grid {
    grid-template-columns: 1fr;
  }

  .navbar-links {
    display: none;
  }

  .navbar-burger {
    display: inline-flex;
  }

  .navbar-menu {
    display: flex;
    flex-direction: column;
    padding: 0.5rem 1.5rem 1rem;
    border-top: 1px solid var(--border);
  }

  .navbar-menu-link {
    padding: 0.6rem 0;
    color: var(--text-muted);
  }

  .navbar-menu-link:hover {
    color: var(--accent);
  }
}
"#;
