pub const PAGE_STYLES: &str = r#"
/* Hero (landing page) */
.hero {
  padding: var(--space-16) 0 var(--space-12);
  text-align: center;
}

.hero-greeting {
  color: var(--text-secondary);
  font-size: 1.1rem;
  margin-bottom: var(--space-2);
}

.hero-name {
  font-size: 3rem;
  font-weight: 700;
  color: var(--text-primary);
  margin-bottom: var(--space-2);
}

.hero-title {
  font-size: 1.5rem;
  color: var(--primary);
  margin-bottom: var(--space-4);
}

.hero-tagline {
  color: var(--text-secondary);
  max-width: 540px;
  margin: 0 auto var(--space-8);
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
  justify-content: center;
  flex-wrap: wrap;
}

.profile-frame {
  width: 180px;
  height: 180px;
  border-radius: var(--radius-full);
  overflow: hidden;
  margin: 0 auto var(--space-6);
  border: 4px solid var(--surface);
  box-shadow: var(--shadow-md);
  background-color: var(--neutral-200);
}

.profile-frame img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

/* Shared page scaffolding */
.page {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-10) var(--space-4);
}

.page-title {
  font-size: 2rem;
  font-weight: 700;
  color: var(--text-primary);
  margin-bottom: var(--space-2);
}

.page-subtitle {
  color: var(--text-secondary);
  margin-bottom: var(--space-8);
}

.empty-state {
  text-align: center;
  color: var(--text-tertiary);
  padding: var(--space-12) 0;
}

/* Grids */
.card-grid {
  display: grid;
  gap: var(--space-6);
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
}

.gallery-grid {
  display: grid;
  gap: var(--space-4);
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
}

.gallery-item {
  position: relative;
  border-radius: var(--radius-lg);
  overflow: hidden;
  aspect-ratio: 4 / 3;
  background-color: var(--neutral-200);
}

.gallery-item img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.gallery-caption {
  position: absolute;
  inset: auto 0 0 0;
  padding: var(--space-2) var(--space-3);
  background: linear-gradient(transparent, rgba(0, 0, 0, 0.7));
  color: white;
  font-size: 0.85rem;
}

.project-image {
  border-radius: var(--radius-md);
  margin-bottom: var(--space-3);
  width: 100%;
  aspect-ratio: 16 / 9;
  object-fit: cover;
  background-color: var(--neutral-200);
}

.card-links {
  display: flex;
  gap: var(--space-3);
  margin-top: var(--space-4);
}

.tech-chips {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-top: var(--space-3);
}

/* Skills */
.skill-group {
  margin-bottom: var(--space-10);
}

.skill-row {
  margin-bottom: var(--space-4);
}

.skill-row-head {
  display: flex;
  justify-content: space-between;
  margin-bottom: var(--space-1);
  font-size: 0.9rem;
  color: var(--text-secondary);
}

.skill-bar {
  height: 8px;
  border-radius: var(--radius-full);
  background-color: var(--neutral-200);
  overflow: hidden;
}

.skill-bar-fill {
  height: 100%;
  border-radius: var(--radius-full);
  background-color: var(--primary);
  transition: width var(--transition-normal) var(--easing-standard);
}

/* Testimonials */
.quote-card {
  border-left: 3px solid var(--primary);
}

.quote-text {
  font-style: italic;
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}

.quote-author {
  font-weight: 600;
  color: var(--text-primary);
}

.quote-role {
  font-size: 0.85rem;
  color: var(--text-tertiary);
}

/* Contact */
.contact-layout {
  display: grid;
  gap: var(--space-8);
  grid-template-columns: 1fr 1.5fr;
}

@media (max-width: 720px) {
  .contact-layout {
    grid-template-columns: 1fr;
  }
}

.contact-detail {
  margin-bottom: var(--space-4);
}

.contact-detail-label {
  font-size: 0.8rem;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--text-tertiary);
}

.social-links {
  display: flex;
  gap: var(--space-3);
  flex-wrap: wrap;
  margin-top: var(--space-6);
}

/* Dashboard */
.dashboard-bar {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  padding: var(--space-3) var(--space-4);
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
  margin-bottom: var(--space-6);
  position: sticky;
  top: calc(var(--header-height) + var(--space-2));
  z-index: 5;
}

.dirty-flag {
  color: var(--warning);
  font-size: 0.9rem;
}

.editor-tabs {
  display: flex;
  gap: var(--space-2);
  flex-wrap: wrap;
  margin-bottom: var(--space-6);
}

.editor-tab {
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  background-color: var(--surface);
  color: var(--text-secondary);
  font-size: 0.9rem;
  cursor: pointer;
  border: 1px solid var(--border);
}

.editor-tab.active {
  background-color: var(--primary);
  border-color: var(--primary);
  color: white;
}

.editor-panel {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
  padding: var(--space-6);
}

.editor-item {
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  padding: var(--space-4);
  margin-bottom: var(--space-4);
}

.editor-item-head {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: var(--space-3);
}

.image-preview {
  max-width: 160px;
  border-radius: var(--radius-md);
  margin-top: var(--space-2);
  display: block;
}

/* Login */
.login-card {
  max-width: 400px;
  margin: var(--space-16) auto;
}
"#;
