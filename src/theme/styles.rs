//! Global CSS styles for the WingsPay landing page.
//!
//! Every colour is a custom property switched by the `dark` / `light` class
//! on `<html>`; components carry no theme logic of their own.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BRAND */
  --sky: #0ea5e9;
  --sky-soft: #38bdf8;
  --indigo: #6366f1;
  --indigo-soft: #818cf8;
  --blue: #3b82f6;
  --emerald: #34d399;
  --brand-gradient: linear-gradient(90deg, #0ea5e9, #6366f1, #2563eb);
  --text-gradient: linear-gradient(90deg, #38bdf8, #818cf8, #3b82f6);

  /* Typography */
  --font-sans: 'Inter', ui-sans-serif, system-ui, -apple-system, 'Segoe UI', sans-serif;
  --text-xs: 0.6875rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-2xl: 1.75rem;
  --text-4xl: 2.75rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --ease-out: cubic-bezier(0.33, 1, 0.68, 1);
}

:root,
:root.dark {
  --bg: #020617;
  --bg-raised: rgba(15, 23, 42, 0.8);
  --bg-muted: rgba(30, 41, 59, 0.8);
  --border: rgba(30, 41, 59, 0.7);
  --border-strong: rgba(51, 65, 85, 0.8);
  --text-primary: #f8fafc;
  --text-secondary: rgba(203, 213, 225, 0.9);
  --text-muted: #94a3b8;
  --nav-bg: rgba(2, 6, 23, 0.95);
  --nav-bg-solid: #020617;
  --card-shadow: 0 24px 80px rgba(15, 23, 42, 0.9);
  --badge-border: rgba(14, 165, 233, 0.4);
  --badge-bg: rgba(15, 23, 42, 0.6);
  --badge-text: #e0f2fe;
  --backdrop-opacity: 0.7;
  color-scheme: dark;
}

:root.light {
  --bg: #ffffff;
  --bg-raised: #ffffff;
  --bg-muted: #f9fafb;
  --border: #e5e7eb;
  --border-strong: #d1d5db;
  --text-primary: #111827;
  --text-secondary: #4b5563;
  --text-muted: #6b7280;
  --nav-bg: rgba(255, 255, 255, 0.95);
  --nav-bg-solid: #ffffff;
  --card-shadow: 0 24px 80px rgba(0, 0, 0, 0.1);
  --badge-border: rgba(59, 130, 246, 0.4);
  --badge-bg: #eff6ff;
  --badge-text: #1d4ed8;
  --backdrop-opacity: 0.3;
  color-scheme: light;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
  transition: background var(--transition-normal), color var(--transition-normal);
}

a {
  color: inherit;
  text-decoration: none;
}

ul {
  list-style: none;
}

/* === Page Layout === */
.page {
  position: relative;
  min-height: 100vh;
}

.page-backdrop {
  position: fixed;
  inset: 0;
  z-index: -10;
  pointer-events: none;
  opacity: var(--backdrop-opacity);
  background:
    radial-gradient(ellipse at 20% 0%, rgba(14, 165, 233, 0.25), transparent 55%),
    radial-gradient(ellipse at 85% 20%, rgba(99, 102, 241, 0.25), transparent 50%);
}

.container {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.sections {
  display: flex;
  flex-direction: column;
  gap: 6rem;
  padding-top: 6rem;
}

.muted {
  color: var(--text-muted);
}

.block {
  display: block;
}

.gradient-text {
  background: var(--text-gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.eyebrow {
  font-size: var(--text-xs);
  font-weight: 600;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--text-muted);
}

.center {
  text-align: center;
}

.icon {
  width: 1.25rem;
  height: 1.25rem;
}

.icon-sm {
  width: 1rem;
  height: 1rem;
}

/* === Brand === */
.brand {
  display: flex;
  align-items: center;
  gap: 0.625rem;
}

.brand-tile {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 2.25rem;
  height: 2.25rem;
  border-radius: 0.5rem;
  background: linear-gradient(45deg, var(--sky-soft), var(--indigo));
  color: #fff;
  font-size: var(--text-lg);
  font-weight: 700;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2);
}

.brand-name {
  font-size: var(--text-lg);
  font-weight: 700;
  letter-spacing: -0.01em;
}

.brand-compact .brand-tile {
  width: 2rem;
  height: 2rem;
}

/* === Buttons === */
.btn-gradient,
.btn-outline,
.icon-btn,
.btn-social {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.375rem;
  font-family: inherit;
  font-size: var(--text-sm);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-gradient {
  padding: 0.5rem 1rem;
  border: none;
  border-radius: 0.5rem;
  background: var(--brand-gradient);
  color: #fff;
  font-weight: 600;
  box-shadow: 0 10px 30px rgba(14, 165, 233, 0.35);
}

.btn-gradient:hover {
  filter: brightness(1.1);
}

.btn-outline {
  padding: 0.5rem 1rem;
  border: 1px solid var(--border-strong);
  border-radius: 0.5rem;
  background: transparent;
  color: var(--text-primary);
  font-weight: 500;
}

.btn-outline:hover {
  background: var(--bg-muted);
}

.btn-pill {
  border-radius: 9999px;
  padding: 0.625rem 1.5rem;
}

.icon-btn {
  width: 2.25rem;
  height: 2.25rem;
  border: none;
  border-radius: 0.5rem;
  background: transparent;
  color: var(--text-muted);
}

.icon-btn:hover {
  background: var(--bg-muted);
  color: var(--text-primary);
}

.btn-social {
  width: 2rem;
  height: 2rem;
  border: 1px solid var(--border-strong);
  border-radius: 0.5rem;
  background: transparent;
  color: var(--text-secondary);
}

.btn-social:hover {
  border-color: var(--sky);
  color: var(--sky);
}

/* === Pills === */
.pill {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.25rem 0.75rem;
  border: 1px solid var(--badge-border);
  border-radius: 9999px;
  background: var(--badge-bg);
  color: var(--badge-text);
  font-size: var(--text-xs);
  font-weight: 500;
}

.pill-dot {
  width: 6px;
  height: 6px;
  border-radius: 50%;
  background: var(--emerald);
}

.chip {
  padding: 0.25rem 0.5rem;
  border-radius: 9999px;
  background: var(--bg-muted);
  color: var(--text-secondary);
  font-size: var(--text-xs);
}

.dot-list {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.5rem 1.25rem;
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.dot-sep {
  display: inline-block;
  width: 4px;
  height: 4px;
  border-radius: 50%;
  background: var(--border-strong);
}

/* === Navbar === */
.navbar {
  position: fixed;
  inset: 0 0 auto 0;
  z-index: 50;
  background: var(--nav-bg);
  backdrop-filter: blur(4px);
  border-bottom: 1px solid var(--border);
  transition: all var(--transition-normal);
  animation: drop-in 0.8s var(--ease-out) both;
}

.navbar.scrolled {
  background: var(--nav-bg-solid);
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.15);
}

.navbar-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 4rem;
}

.navbar-links {
  display: flex;
  gap: 2rem;
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--text-secondary);
}

.navbar-links a:hover {
  color: var(--text-primary);
}

.navbar-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

/* === Hero === */
.hero {
  display: flex;
  align-items: center;
  gap: 3rem;
  padding-top: 3rem;
}

.hero-copy {
  flex: 1;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.hero-title {
  font-size: var(--text-4xl);
  font-weight: 600;
  line-height: 1.1;
  letter-spacing: -0.02em;
}

.hero-body {
  max-width: 36rem;
  color: var(--text-secondary);
}

.hero-ctas {
  display: flex;
  gap: 0.75rem;
}

.hero-visual {
  flex: 1;
  display: flex;
  justify-content: flex-end;
}

.hero-card {
  position: relative;
  width: 100%;
  max-width: 36rem;
  padding: 1.5rem;
  border: 1px solid var(--border);
  border-radius: 1.5rem;
  background: var(--bg-raised);
  box-shadow: var(--card-shadow);
  overflow: hidden;
}

.hero-glow {
  position: absolute;
  width: 8rem;
  height: 8rem;
  border-radius: 50%;
  filter: blur(48px);
  pointer-events: none;
}

.hero-glow-sky {
  left: -4rem;
  top: -2.5rem;
  background: rgba(14, 165, 233, 0.2);
}

.hero-glow-indigo {
  right: -2.5rem;
  bottom: -2.5rem;
  background: rgba(99, 102, 241, 0.25);
}

.hero-card-head {
  display: flex;
  justify-content: space-between;
  margin-bottom: 1rem;
  font-size: var(--text-xs);
}

.hero-volume {
  padding: 1.25rem;
  border-radius: 1rem;
  background: var(--bg-muted);
  box-shadow: inset 0 0 0 1px var(--border);
}

.hero-volume-head {
  display: flex;
  justify-content: space-between;
  font-size: var(--text-xs);
  color: var(--text-secondary);
}

.hero-volume-value {
  font-size: var(--text-2xl);
  font-weight: 600;
}

.sparkline {
  display: flex;
  align-items: flex-end;
  gap: 0.375rem;
  height: 8rem;
  margin-top: 1rem;
}

.sparkline span {
  flex: 1;
  border-radius: 0.25rem 0.25rem 0 0;
  background: linear-gradient(180deg, var(--sky-soft), var(--indigo));
  opacity: 0.85;
}

.hero-stats {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 0.75rem;
  margin-top: 1rem;
}

/* === Stats === */
.stat-tile {
  padding: 0.75rem;
  border-radius: 1rem;
  background: var(--bg-muted);
  box-shadow: inset 0 0 0 1px var(--border);
  font-size: var(--text-xs);
}

.stat-label {
  color: var(--text-muted);
}

.stat-value {
  margin-top: 0.25rem;
  font-size: var(--text-lg);
  font-weight: 600;
}

.stat-success { color: var(--emerald); }
.stat-info { color: var(--sky-soft); }
.stat-accent { color: var(--indigo-soft); }

.stat-chip {
  padding: 0.5rem 0.75rem;
  border-radius: 0.75rem;
  background: var(--bg-muted);
  box-shadow: inset 0 0 0 1px var(--border);
  color: var(--text-secondary);
  font-size: var(--text-xs);
}

/* === Logo Slider === */
.logo-slider {
  padding: 3rem 0;
  background: var(--bg-muted);
}

.logo-viewport {
  position: relative;
  margin-top: 2rem;
  overflow: hidden;
}

.logo-track {
  display: flex;
  width: 300%;
  animation: marquee 20s linear infinite;
}

.logo-item {
  flex: 0 0 calc(100% / 24);
  display: flex;
  align-items: center;
  justify-content: center;
  height: 3rem;
  font-size: var(--text-lg);
  font-weight: 700;
  letter-spacing: -0.02em;
  color: var(--text-muted);
  opacity: 0.7;
  transition: opacity var(--transition-fast);
}

.logo-item:hover {
  opacity: 1;
}

.logo-fade {
  position: absolute;
  top: 0;
  bottom: 0;
  width: 6rem;
  pointer-events: none;
}

.logo-fade-left {
  left: 0;
  background: linear-gradient(90deg, var(--bg-muted), transparent);
}

.logo-fade-right {
  right: 0;
  background: linear-gradient(270deg, var(--bg-muted), transparent);
}

@keyframes marquee {
  from { transform: translateX(0); }
  to { transform: translateX(-33.333%); }
}

/* === Section Headings === */
.section-head {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  max-width: 48rem;
  margin: 0 auto 3rem;
  text-align: center;
}

.section-head.left {
  align-items: flex-start;
  margin-left: 0;
  text-align: left;
}

.section-title {
  font-size: var(--text-4xl);
  font-weight: 600;
  line-height: 1.15;
  letter-spacing: -0.02em;
}

.section-body {
  color: var(--text-secondary);
}

/* === Features === */
.feature-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
}

.feature-card {
  position: relative;
  padding: 2rem;
  border: 1px solid var(--border);
  border-radius: 1.25rem;
  background: var(--bg-raised);
  overflow: hidden;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.feature-card:hover {
  transform: translateY(-4px) scale(1.02);
  box-shadow: var(--card-shadow);
}

.feature-wash {
  position: absolute;
  inset: 0;
  opacity: 0.6;
  pointer-events: none;
  background: var(--wash);
}

.feature-icon {
  position: relative;
  font-size: 2rem;
}

.feature-title {
  position: relative;
  margin-top: 1rem;
  font-size: var(--text-lg);
  font-weight: 600;
}

.feature-body {
  position: relative;
  margin-top: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.grad-sky { --wash: linear-gradient(135deg, rgba(14, 165, 233, 0.2), rgba(59, 130, 246, 0.2), rgba(99, 102, 241, 0.2)); }
.grad-emerald { --wash: linear-gradient(135deg, rgba(16, 185, 129, 0.2), rgba(20, 184, 166, 0.2), rgba(6, 182, 212, 0.2)); }
.grad-violet { --wash: linear-gradient(135deg, rgba(139, 92, 246, 0.2), rgba(168, 85, 247, 0.2), rgba(217, 70, 239, 0.2)); }
.grad-amber { --wash: linear-gradient(135deg, rgba(245, 158, 11, 0.2), rgba(249, 115, 22, 0.2), rgba(239, 68, 68, 0.2)); }
.grad-rose { --wash: linear-gradient(135deg, rgba(244, 63, 94, 0.2), rgba(236, 72, 153, 0.2), rgba(239, 68, 68, 0.2)); }
.grad-indigo { --wash: linear-gradient(135deg, rgba(99, 102, 241, 0.2), rgba(59, 130, 246, 0.2), rgba(6, 182, 212, 0.2)); }

/* === Highlights === */
.highlight-list {
  display: flex;
  flex-direction: column;
  gap: 2.5rem;
}

.highlight-block {
  display: grid;
  grid-template-columns: 1fr 1fr;
  align-items: center;
  gap: 2.5rem;
  padding: 2rem;
  border: 1px solid var(--border);
  border-radius: 1.5rem;
  background: var(--bg-raised);
  box-shadow: var(--card-shadow);
}

.highlight-block.flipped .highlight-copy {
  order: 2;
}

.highlight-copy {
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  gap: 1rem;
}

.highlight-title {
  font-size: var(--text-2xl);
  font-weight: 600;
}

.highlight-body {
  color: var(--text-secondary);
}

.highlight-stats {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.highlight-art {
  aspect-ratio: 4 / 3;
  border-radius: 1rem;
  box-shadow: inset 0 0 0 1px var(--border);
}

.art-payments { background: linear-gradient(135deg, #0ea5e9 0%, #6366f1 60%, #1e1b4b 100%); }
.art-payouts { background: linear-gradient(135deg, #10b981 0%, #0ea5e9 55%, #0f172a 100%); }
.art-compliance { background: linear-gradient(135deg, #8b5cf6 0%, #6366f1 50%, #0f172a 100%); }

/* === Footer === */
.footer {
  margin-top: 6rem;
  padding: 4rem 0 3rem;
  border-top: 1px solid var(--border);
  background: var(--bg);
}

.footer-grid {
  display: grid;
  grid-template-columns: 2fr repeat(4, 1fr);
  gap: 2.5rem;
}

.footer-brand {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.footer-blurb,
.footer-note {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.footer-policies {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.footer-column h4 {
  margin-bottom: 1rem;
  font-size: var(--text-sm);
  font-weight: 600;
}

.footer-column li {
  margin-bottom: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.footer-socials {
  display: flex;
  gap: 0.5rem;
  margin-bottom: 1rem;
}

.footer-note a {
  color: var(--sky);
}

/* === Particle Overlay === */
.particle-overlay {
  position: fixed;
  inset: 0;
  z-index: 9999;
  pointer-events: none;
}

.particle {
  position: fixed;
  width: 4px;
  height: 4px;
  border-radius: 50%;
  pointer-events: none;
  opacity: 0;
  will-change: transform, opacity;
}

/* === Load-in Motion === */
.load-in {
  animation: rise-in 0.9s var(--ease-out) 0.15s both;
}

.load-in-right {
  animation: slide-in-right 1s var(--ease-out) 0.25s both;
}

.reveal {
  animation: rise-in 0.8s var(--ease-out) both;
}

@keyframes drop-in {
  from { transform: translateY(-100px); opacity: 0; }
  to { transform: translateY(0); opacity: 1; }
}

@keyframes rise-in {
  from { transform: translateY(30px); opacity: 0; }
  to { transform: translateY(0); opacity: 1; }
}

@keyframes slide-in-right {
  from { transform: translateX(80px) scale(0.96); opacity: 0; }
  to { transform: translateX(0) scale(1); opacity: 1; }
}

/* === Accessibility === */
*:focus-visible {
  outline: 2px solid var(--sky);
  outline-offset: 2px;
}

@media (prefers-reduced-motion: reduce) {
  *,
  *::before,
  *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }
}

/* === Responsive Layout === */
@media (max-width: 1024px) {
  .navbar-links {
    display: none;
  }

  .feature-grid {
    grid-template-columns: repeat(2, 1fr);
  }

  .footer-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}

@media (max-width: 768px) {
  .hero {
    flex-direction: column;
    text-align: center;
  }

  .hero-copy {
    align-items: center;
  }

  .hero-title,
  .section-title {
    font-size: var(--text-2xl);
  }

  .hero-ctas {
    flex-direction: column;
    width: 100%;
  }

  .feature-grid,
  .highlight-block {
    grid-template-columns: 1fr;
  }

  .highlight-block.flipped .highlight-copy {
    order: 0;
  }

  .particle-overlay {
    display: none;
  }
}

@media (max-width: 640px) {
  .hide-mobile {
    display: none;
  }

  .footer-grid {
    grid-template-columns: 1fr;
  }
}
"#;
