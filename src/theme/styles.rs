//! Global CSS styles for the Palm Haven site.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SAND (Backgrounds) */
  --sand-light: #faf6ef;
  --sand: #f0e7d8;
  --sand-border: #d9cbb3;

  /* SEA (Primary accent) */
  --sea: #0f6e74;
  --sea-deep: #0a4d52;
  --sea-glow: rgba(15, 110, 116, 0.25);

  /* PALM (Secondary accent) */
  --palm: #4a7c3f;
  --palm-light: #7fb069;

  /* SUNSET (Call to action) */
  --sunset: #e0742c;
  --sunset-glow: rgba(224, 116, 44, 0.3);

  /* TEXT */
  --text-primary: #2b2620;
  --text-secondary: rgba(43, 38, 32, 0.72);
  --text-inverse: #faf6ef;

  /* SEMANTIC */
  --danger: #c0392b;

  /* Typography */
  --font-serif: 'Playfair Display', Georgia, serif;
  --font-sans: 'Lato', 'Helvetica Neue', sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-reveal: 800ms ease-out;
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
}

body {
  font-family: var(--font-sans);
  background: var(--sand-light);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

/* === Navigation === */
.nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 90;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.2rem 3rem;
  background: transparent;
  transition: background var(--transition-normal), padding var(--transition-normal);
}

.nav.scrolled {
  background: var(--sand-light);
  box-shadow: 0 2px 12px rgba(43, 38, 32, 0.12);
  padding: 0.6rem 3rem;
}

.nav__logo {
  font-family: var(--font-serif);
  font-size: 1.6rem;
  color: var(--text-inverse);
  transition: font-size var(--transition-normal), color var(--transition-normal);
}

.nav.scrolled .nav__logo {
  font-size: 1.2rem;
  color: var(--sea-deep);
}

.nav__links {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav__link {
  font-size: 0.95rem;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  color: var(--text-inverse);
  background: none;
  border: none;
  cursor: pointer;
  padding-bottom: 0.2rem;
  border-bottom: 2px solid transparent;
  transition: color var(--transition-fast), border-color var(--transition-fast);
}

.nav.scrolled .nav__link {
  color: var(--text-primary);
}

.nav__link:hover {
  color: var(--sunset);
}

.nav__link.active {
  color: var(--sunset);
  border-bottom-color: var(--sunset);
}

/* === Hero === */
.home {
  position: relative;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  background: linear-gradient(rgba(10, 77, 82, 0.55), rgba(10, 77, 82, 0.55)),
    var(--sea-deep);
  color: var(--text-inverse);
  padding: 4rem 2rem;
}

.home__title {
  font-family: var(--font-serif);
  font-size: 3.4rem;
  font-weight: 500;
  letter-spacing: 0.04em;
}

.home__tagline {
  margin-top: 1rem;
  font-size: 1.2rem;
  color: rgba(250, 246, 239, 0.85);
}

.home.scrolled .home__title {
  opacity: 0.92;
}

/* === Sections === */
.section {
  max-width: 1100px;
  margin: 0 auto;
  padding: 6rem 2rem;
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.section--hidden {
  opacity: 0;
  transform: translateY(6rem);
}

.section__header {
  font-family: var(--font-serif);
  font-size: 2.2rem;
  color: var(--sea-deep);
  margin-bottom: 2.5rem;
  text-align: center;
}

/* === Buttons === */
.btn {
  font-family: var(--font-sans);
  font-size: 1rem;
  border: none;
  cursor: pointer;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.btn--cta {
  background: var(--sunset);
  color: var(--text-inverse);
  padding: 0.9rem 2.4rem;
  border-radius: 2rem;
  margin-top: 2rem;
}

.btn--cta:hover {
  transform: translateY(-2px);
  box-shadow: 0 4px 16px var(--sunset-glow);
}

.btn--ghost {
  background: transparent;
  color: var(--sea);
  border: 1px solid var(--sea);
  padding: 0.7rem 1.8rem;
  border-radius: 2rem;
}

.btn--ghost:hover {
  background: var(--sea-glow);
}

/* === Room Tabs === */
.tabs {
  display: flex;
  justify-content: center;
  gap: 1rem;
  margin-bottom: 2rem;
}

.tab {
  background: var(--sand);
  border: 1px solid var(--sand-border);
  border-radius: 2rem;
  padding: 0.6rem 1.6rem;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.tab--active {
  background: var(--sea);
  border-color: var(--sea);
  color: var(--text-inverse);
}

.rooms__content {
  display: none;
}

.rooms__content.content--active {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 2rem;
  align-items: center;
}

.rooms__rate {
  font-family: var(--font-serif);
  font-size: 1.4rem;
  color: var(--sunset);
}

/* === Facilities Strip === */
.facilities__strip {
  display: flex;
  gap: 1.5rem;
  overflow-x: auto;
  scrollbar-width: none;
  padding: 1rem 0;
}

.facilities__strip::-webkit-scrollbar {
  display: none;
}

.facility {
  flex: 0 0 280px;
  background: var(--sand);
  border: 1px solid var(--sand-border);
  border-radius: 0.8rem;
  padding: 1.6rem;
}

.facility__name {
  font-family: var(--font-serif);
  font-size: 1.2rem;
  color: var(--sea-deep);
  margin-bottom: 0.6rem;
}

/* === Testimonial Slider === */
.slider {
  position: relative;
  max-width: 720px;
  margin: 0 auto;
  overflow: hidden;
}

.slider__track {
  display: flex;
  transition: transform 400ms ease;
}

.slide {
  flex: 0 0 100%;
  padding: 0 2rem;
}

.testimonial__header {
  font-family: var(--font-serif);
  font-size: 1.3rem;
  color: var(--sea-deep);
  margin-bottom: 1rem;
}

.testimonial__text {
  font-style: italic;
  color: var(--text-secondary);
  margin-bottom: 1.4rem;
}

.testimonial__author {
  display: flex;
  align-items: center;
  gap: 1rem;
  font-style: normal;
}

.testimonial__photo {
  width: 48px;
  height: 48px;
  border-radius: 50%;
  object-fit: cover;
}

.testimonial__name {
  font-weight: 700;
}

.testimonial__location {
  font-size: 0.85rem;
  color: var(--text-secondary);
}

.slider__btn {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  width: 2.6rem;
  height: 2.6rem;
  border-radius: 50%;
  background: var(--sand-light);
  border: 1px solid var(--sand-border);
  font-size: 1.2rem;
  color: var(--sea-deep);
  z-index: 5;
}

.slider__btn--left { left: 0.5rem; }
.slider__btn--right { right: 0.5rem; }

.dots {
  display: flex;
  justify-content: center;
  gap: 0.6rem;
  margin-top: 1.6rem;
}

.dots__dot {
  width: 0.7rem;
  height: 0.7rem;
  border-radius: 50%;
  border: none;
  background: var(--sand-border);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.dots__dot.active {
  background: var(--sunset);
}

/* === Modals & Overlay === */
.overlay {
  position: fixed;
  inset: 0;
  background: rgba(43, 38, 32, 0.55);
  backdrop-filter: blur(3px);
  z-index: 100;
}

.modal {
  position: fixed;
  top: 50%;
  left: 50%;
  transform: translate(-50%, -50%);
  width: min(92vw, 520px);
  max-height: 86vh;
  overflow-y: auto;
  background: var(--sand-light);
  border-radius: 0.8rem;
  padding: 2rem;
  z-index: 110;
  box-shadow: 0 18px 50px rgba(43, 38, 32, 0.3);
}

.modal__header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1.4rem;
}

.modal__title {
  font-family: var(--font-serif);
  font-size: 1.5rem;
  color: var(--sea-deep);
}

.btn--close-modal {
  background: none;
  border: none;
  font-size: 1.8rem;
  line-height: 1;
  color: var(--text-secondary);
  cursor: pointer;
}

.btn--close-modal:hover {
  color: var(--danger);
}

/* === Forms === */
.form__field {
  margin-bottom: 1.2rem;
}

.form__label {
  display: block;
  font-size: 0.85rem;
  letter-spacing: 0.04em;
  text-transform: uppercase;
  color: var(--text-secondary);
  margin-bottom: 0.35rem;
}

.form__input {
  width: 100%;
  padding: 0.7rem 0.9rem;
  font-size: 1rem;
  font-family: var(--font-sans);
  color: var(--text-primary);
  background: #fff;
  border: 1px solid var(--sand-border);
  border-radius: 0.4rem;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.form__input:focus {
  outline: none;
  border-color: var(--sea);
  box-shadow: 0 0 0 3px var(--sea-glow);
}

.form__input[readonly] {
  background: var(--sand);
  color: var(--text-secondary);
}

.booking__form {
  max-width: 480px;
  margin: 0 auto;
}

.availability {
  color: var(--palm);
  margin: 1rem 0;
}

.price__description {
  color: var(--text-secondary);
}

.price__total {
  font-family: var(--font-serif);
  font-size: 1.8rem;
  color: var(--sunset);
  margin-bottom: 1.4rem;
}

.contact-methods {
  display: flex;
  gap: 1.4rem;
  margin: 1rem 0;
}

.contact-methods label {
  display: flex;
  align-items: center;
  gap: 0.4rem;
  font-size: 0.95rem;
  cursor: pointer;
}

/* === Footer === */
.footer {
  background: var(--sea-deep);
  color: var(--text-inverse);
  text-align: center;
  padding: 4rem 2rem;
}

.footer__note {
  margin-top: 0.8rem;
  font-size: 0.85rem;
  color: rgba(250, 246, 239, 0.6);
}
"#;
