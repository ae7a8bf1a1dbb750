//! Global CSS styles for the Trellis gallery.
//!
//! Covers the component classes (`FormItem`, `SliderSwitch`, `Subhead`,
//! `Caption`) for every platform and density variant, plus the gallery
//! layout itself.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --background: #f5f5f7;
  --surface: #ffffff;
  --border: #dce1e6;
  --border-strong: #b8c1cc;

  --text-primary: #000000;
  --text-secondary: #6d7885;
  --text-muted: #99a2ad;

  --accent: #2688eb;
  --danger: #e64646;
  --success: #4bb34b;

  --font-sans: -apple-system, system-ui, 'Helvetica Neue', Roboto, sans-serif;

  --radius: 10px;
  --transition-fast: 150ms ease;
  --transition-slide: 200ms cubic-bezier(0.4, 0, 0.2, 1);
}

*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--background);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: 15px;
}

/* === Typography === */
.Subhead {
  font-size: 14px;
  line-height: 18px;
  color: var(--text-secondary);
}
.Subhead--w-regular { font-weight: 400; }
.Subhead--w-medium { font-weight: 500; }
.Subhead--w-semibold { font-weight: 600; }
.Subhead--w-bold { font-weight: 700; }

.Caption { color: var(--text-secondary); }
.Caption--l-1 { font-size: 13px; line-height: 16px; }
.Caption--l-2 { font-size: 12px; line-height: 14px; }
.Caption--l-3 { font-size: 11px; line-height: 14px; }
.Caption--l-4 { font-size: 9px; line-height: 12px; text-transform: uppercase; }
.Caption--w-regular { font-weight: 400; }
.Caption--w-medium { font-weight: 500; }
.Caption--w-semibold { font-weight: 600; }
.Caption--w-bold { font-weight: 700; }

/* === FormItem === */
.FormItem {
  display: block;
  padding: 12px 16px;
  border: 0;
}
.FormItem--sizeY-compact { padding-top: 8px; padding-bottom: 8px; }
.FormItem--ios .FormItem__top { padding-left: 12px; }
.FormItem--vkcom { padding-left: 0; padding-right: 0; }

.FormItem__top {
  display: block;
  padding-bottom: 8px;
}
.FormItem--sizeY-compact .FormItem__top { padding-bottom: 6px; }

.FormItem__bottom {
  display: block;
  padding-top: 8px;
}
.FormItem--error .FormItem__bottom { color: var(--danger); }
.FormItem--valid .FormItem__bottom { color: var(--success); }
.FormItem--error .gallery-input { border-color: var(--danger); background: #faebeb; }
.FormItem--valid .gallery-input { border-color: var(--success); }

/* === SliderSwitch === */
.SliderSwitch {
  position: relative;
  display: flex;
  height: 36px;
  border-radius: var(--radius);
  background: var(--background);
  user-select: none;
}
.FormItem--sizeY-compact .SliderSwitch { height: 30px; }

.SliderSwitch__border {
  position: absolute;
  inset: 0;
  border: 1px solid var(--border);
  border-radius: inherit;
  pointer-events: none;
}

.SliderSwitch__slider {
  position: absolute;
  top: 1px;
  bottom: 1px;
  left: 1px;
  width: calc(50% - 2px);
  border-radius: calc(var(--radius) - 1px);
  background: var(--surface);
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12);
  opacity: 0;
  transition: transform var(--transition-slide), opacity var(--transition-fast);
}
.SliderSwitch--firstActive { opacity: 1; transform: translateX(0); }
.SliderSwitch--secondActive { opacity: 1; transform: translateX(calc(100% + 2px)); }

.SliderSwitch__button {
  position: relative;
  z-index: 1;
  flex: 1;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 14px;
  color: var(--text-secondary);
  cursor: pointer;
  outline: none;
  transition: color var(--transition-fast);
}
.SliderSwitch__button--hover { color: var(--text-primary); }
.SliderSwitch__button--active { color: var(--text-primary); font-weight: 500; }
.SliderSwitch__button:focus-visible { box-shadow: inset 0 0 0 2px var(--accent); border-radius: var(--radius); }

/* === Gallery === */
.gallery {
  max-width: 520px;
  margin: 0 auto;
  padding: 24px 0 48px;
}

.gallery-header { padding: 0 16px 16px; }
.gallery-title { font-size: 28px; font-weight: 700; }
.gallery-tagline { color: var(--text-secondary); }

.gallery-toolbar,
.gallery-section {
  margin: 12px 0;
  padding: 12px 0;
  background: var(--surface);
  border-radius: var(--radius);
}
.gallery-toolbar { display: flex; flex-direction: column; gap: 12px; padding: 12px 16px; }

.gallery-section-title {
  padding: 0 16px 4px;
  font-size: 13px;
  font-weight: 600;
  text-transform: uppercase;
  color: var(--text-muted);
}

.gallery-section > .SliderSwitch,
.gallery-section > .gallery-chip,
.gallery-section > .gallery-note,
.gallery-section form > .gallery-chip { margin: 8px 16px; }

.gallery-chips { display: flex; gap: 8px; }
.gallery-chip {
  padding: 6px 12px;
  border: 1px solid var(--border);
  border-radius: 16px;
  background: transparent;
  color: var(--accent);
  font: inherit;
  cursor: pointer;
}
.gallery-chip.selected { background: var(--accent); border-color: var(--accent); color: #fff; }

.gallery-input {
  width: 100%;
  height: 40px;
  padding: 0 12px;
  border: 1px solid var(--border);
  border-radius: 8px;
  background: var(--background);
  font: inherit;
}
.FormItem--sizeY-compact .gallery-input { height: 32px; }

.gallery-note { font-size: 13px; color: var(--text-secondary); }
.gallery-highlight { border-left: 3px solid var(--accent); }
"#;
